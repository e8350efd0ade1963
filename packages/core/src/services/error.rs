//! Service Layer Error Types
//!
//! Resolution misses are not errors (they degrade to logged no-ops); the
//! only failures that reach this layer are host API calls the command
//! chose not to swallow locally.

use crate::host::HostError;
use thiserror::Error;

/// Command operation errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// An awaited host API call failed
    #[error("host call failed: {0}")]
    Host(#[from] HostError),

    /// Command registration or wiring failed
    #[error("command setup failed: {0}")]
    SetupFailed(String),
}

impl CommandError {
    /// Create a setup error
    pub fn setup_failed(msg: impl Into<String>) -> Self {
        Self::SetupFailed(msg.into())
    }
}
