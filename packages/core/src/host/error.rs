//! Host Call Error Types
//!
//! Failures surfaced by the host editor's API. These are never propagated
//! out of a command unhandled: callers catch them, log, and degrade to
//! "do nothing".

use thiserror::Error;

/// An awaited host API call failed.
#[derive(Error, Debug)]
pub enum HostError {
    /// A block-tree fetch failed (not "block absent" - that is `Ok(None)`)
    #[error("block fetch failed: {0}")]
    BlockFetchFailed(String),

    /// Inserting text at the edit cursor failed
    #[error("cursor insertion failed: {0}")]
    InsertionFailed(String),

    /// A host UI action (side panel, palette) failed
    #[error("host UI call failed: {0}")]
    UiCallFailed(String),
}

impl HostError {
    /// Create a block fetch error
    pub fn block_fetch_failed(msg: impl Into<String>) -> Self {
        Self::BlockFetchFailed(msg.into())
    }

    /// Create an insertion error
    pub fn insertion_failed(msg: impl Into<String>) -> Self {
        Self::InsertionFailed(msg.into())
    }

    /// Create a UI call error
    pub fn ui_call_failed(msg: impl Into<String>) -> Self {
        Self::UiCallFailed(msg.into())
    }
}
