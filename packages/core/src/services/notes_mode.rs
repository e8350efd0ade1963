//! Notes-Mode Presentation Toggle
//!
//! Applies and reverts the immersive viewing layout on a resolved video
//! element. Both directions re-resolve "the current video" independently,
//! so exiting may revert a different video than the one most recently
//! entered if the cursor has moved; the last styled handle is retained
//! only as a fallback when re-resolution misses entirely.
//!
//! The toggle mutates element styles only; document content is never
//! touched.

use tokio::sync::Mutex;

use crate::host::BlockAccessor;
use crate::render::{RenderLayer, VideoHandle, VideoStyle};
use crate::services::video_resolver::VideoResolver;

/// Immersive layout toggle over the currently resolvable video.
pub struct NotesMode<B, R> {
    resolver: VideoResolver<B, R>,
    /// Last handle styled by `enter`, kept so `exit` can still revert it
    /// when the cursor has moved somewhere no video resolves.
    last_styled: Mutex<Option<VideoHandle>>,
}

impl<B, R> NotesMode<B, R>
where
    B: BlockAccessor,
    R: RenderLayer,
{
    /// Create a toggle over the given resolver
    pub fn new(resolver: VideoResolver<B, R>) -> Self {
        Self {
            resolver,
            last_styled: Mutex::new(None),
        }
    }

    /// Apply the immersive layout to the current video.
    ///
    /// Returns whether a video was restyled; a miss is a logged no-op.
    pub async fn enter(&self) -> bool {
        let Some(video) = self.resolver.resolve().await else {
            tracing::warn!("enter notes mode: no video resolved");
            return false;
        };

        video.apply_style(VideoStyle::immersive());
        *self.last_styled.lock().await = Some(video);
        true
    }

    /// Revert the current video to its layout-flow defaults.
    ///
    /// Re-resolves independently of any prior `enter`; falls back to the
    /// retained handle when nothing resolves. Returns whether a video was
    /// reverted.
    pub async fn exit(&self) -> bool {
        let resolved = self.resolver.resolve().await;

        let mut last_styled = self.last_styled.lock().await;
        let video = match resolved.or_else(|| last_styled.take()) {
            Some(video) => video,
            None => {
                tracing::warn!("exit notes mode: no video resolved");
                return false;
            }
        };

        video.apply_style(VideoStyle::inline());
        *last_styled = None;
        true
    }
}
