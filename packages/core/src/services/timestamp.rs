//! Playback Timestamp Formatting
//!
//! Converts a video's floating-point playback position into the
//! ` [[hh:mm:ss]] ` reference token inserted into the document.
//!
//! A reading of exactly zero is indistinguishable from "no video was
//! resolved", so both are distinct variants of [`PlaybackReading`] and
//! both skip insertion rather than producing `[[00:00:00]]`.

use crate::render::VideoHandle;

/// Tagged playback reading.
///
/// Keeps "resolver found nothing" and "video genuinely at start" as
/// separate conditions even though both currently skip insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackReading {
    /// No video element resolved
    NoVideo,
    /// Video at position zero (after flooring)
    AtStart,
    /// Whole seconds into playback
    At(u64),
}

impl PlaybackReading {
    /// The insertable reference token, or `None` when the reading skips.
    ///
    /// Tokens carry surrounding spaces so they can be inserted directly
    /// at the edit cursor: ` [[00:02:05]] `.
    pub fn timestamp_token(&self) -> Option<String> {
        match self {
            Self::NoVideo | Self::AtStart => None,
            Self::At(seconds) => Some(format!(" [[{}]] ", format_clock(*seconds))),
        }
    }
}

/// Read a video's playback position, flooring to whole seconds.
pub fn read_playback(video: Option<&VideoHandle>) -> PlaybackReading {
    let Some(video) = video else {
        return PlaybackReading::NoVideo;
    };

    let seconds = video.current_time().floor();
    if seconds <= 0.0 {
        PlaybackReading::AtStart
    } else {
        PlaybackReading::At(seconds as u64)
    }
}

/// Render whole seconds as zero-padded `hh:mm:ss`.
///
/// Local video durations are assumed short; values past 24 hours widen
/// the hour field rather than wrapping.
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
