//! Business Services
//!
//! This module contains the core logic behind the video note-taking
//! commands:
//!
//! - `VideoResolver` - nearest-ancestor video-block resolution
//! - `NotesMode` - immersive presentation toggle for a resolved video
//! - `timestamp` - playback reading and `[[hh:mm:ss]]` token formatting
//!
//! Services coordinate between the host's block tree and render layer,
//! treating every miss as a logged, explicit "none" rather than an error.

pub mod error;
pub mod notes_mode;
pub mod timestamp;
pub mod video_resolver;

pub use error::CommandError;
pub use notes_mode::NotesMode;
pub use timestamp::{format_clock, read_playback, PlaybackReading};
pub use video_resolver::VideoResolver;
