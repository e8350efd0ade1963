//! Live video element handle and presentation styles

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// The presentation properties the notes-mode toggle owns.
///
/// Six properties: position mode, top/left offsets, width, height,
/// background, and stacking order. Values are CSS strings as the host's
/// render layer applies them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStyle {
    pub position: String,
    pub top: String,
    pub left: String,
    pub width: String,
    pub height: String,
    pub background: String,
    pub z_index: String,
}

impl VideoStyle {
    /// Layout-flow defaults: the state every touched property is reset to
    /// when exiting notes mode.
    pub fn inline() -> Self {
        Self {
            position: "static".to_string(),
            top: "auto".to_string(),
            left: "auto".to_string(),
            width: "100%".to_string(),
            height: "auto".to_string(),
            background: "transparent".to_string(),
            z_index: "auto".to_string(),
        }
    }

    /// Immersive notes-mode overrides: pinned to the viewport's top-left
    /// corner at 70% viewport width and full viewport height, opaque black,
    /// stacked above surrounding content.
    pub fn immersive() -> Self {
        Self {
            position: "fixed".to_string(),
            top: "0".to_string(),
            left: "0".to_string(),
            width: "70vw".to_string(),
            height: "100vh".to_string(),
            background: "black".to_string(),
            z_index: "999".to_string(),
        }
    }
}

impl Default for VideoStyle {
    fn default() -> Self {
        Self::inline()
    }
}

#[derive(Debug)]
struct VideoState {
    current_time: f64,
    style: VideoStyle,
}

/// Shared handle to a playable video element's live state.
///
/// Clones refer to the same element; the core holds one for at most the
/// duration of a command invocation, except the notes-mode toggle which
/// retains the last handle it styled.
#[derive(Debug, Clone)]
pub struct VideoHandle {
    inner: Arc<Mutex<VideoState>>,
}

impl VideoHandle {
    /// Create a handle at the given playback position (seconds)
    pub fn new(current_time: f64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VideoState {
                current_time,
                style: VideoStyle::inline(),
            })),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, VideoState> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current playback position in seconds.
    ///
    /// Monotonic non-negative while the video plays; 0.0 at start.
    pub fn current_time(&self) -> f64 {
        self.state().current_time
    }

    /// Advance or seek the playback position (host/render side)
    pub fn set_current_time(&self, seconds: f64) {
        self.state().current_time = seconds;
    }

    /// Snapshot of the element's current presentation style
    pub fn style(&self) -> VideoStyle {
        self.state().style.clone()
    }

    /// Overwrite the element's presentation style
    pub fn apply_style(&self, style: VideoStyle) {
        self.state().style = style;
    }

    /// Whether two handles refer to the same live element
    pub fn same_element(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
