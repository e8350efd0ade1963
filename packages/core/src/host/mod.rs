//! Host Editor Contract
//!
//! The editor application is an external collaborator: it owns the block
//! model, the edit cursor, the side panel, and the command palette. This
//! module defines the slice of its API the core consumes, as async traits
//! the embedding layer implements.
//!
//! Host calls complete on the editor's cooperative queue; the core awaits
//! them one at a time and never retries.

mod error;

pub use error::HostError;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::ContentBlock;

/// Read access to the host's block tree.
#[async_trait]
pub trait BlockAccessor: Send + Sync {
    /// The block holding the user's edit cursor, if any
    async fn current_block(&self) -> Result<Option<ContentBlock>, HostError>;

    /// Fetch a block by identifier; `None` for dangling references
    async fn block_by_id(&self, id: &str) -> Result<Option<ContentBlock>, HostError>;
}

/// Severity of a transient UI message (toast).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// The editor surface commands act on.
#[async_trait]
pub trait EditorHost: BlockAccessor {
    /// Insert a literal string at the current edit cursor
    async fn insert_at_cursor(&self, text: &str) -> Result<(), HostError>;

    /// Open a block in the side panel (fire-and-forget UI action)
    async fn open_in_side_panel(&self, block_id: &str) -> Result<(), HostError>;

    /// Show a transient UI message
    async fn show_message(&self, level: MessageLevel, text: &str);
}

/// Palette entry metadata for a registered command.
///
/// # Examples
///
/// ```rust
/// use videonotes_core::host::CommandDescriptor;
///
/// let descriptor = CommandDescriptor::new("Insert video timestamp", "Insert [[hh:mm:ss]] at the cursor")
///     .with_keybinding("mod+alt+t");
/// assert!(descriptor.in_palette);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    /// Display label shown in the palette
    pub label: String,

    /// Longer description of the command's effect
    pub description: String,

    /// Default key combination (host keybinding syntax, e.g. "mod+alt+t")
    pub keybinding: Option<String>,

    /// Whether the command is listed in the command palette
    pub in_palette: bool,
}

impl CommandDescriptor {
    /// Create a palette-visible descriptor with no keybinding
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            keybinding: None,
            in_palette: true,
        }
    }

    /// Set the default keybinding
    pub fn with_keybinding(mut self, keybinding: impl Into<String>) -> Self {
        self.keybinding = Some(keybinding.into());
        self
    }

    /// Hide the command from the palette
    pub fn hidden(mut self) -> Self {
        self.in_palette = false;
        self
    }
}

/// Boxed future produced by a command handler invocation.
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A user-invocable command handler.
pub type CommandHandler = Arc<dyn Fn() -> CommandFuture + Send + Sync>;

/// Host-side command registration surface.
pub trait CommandRegistry: Send + Sync {
    /// Register a named command with its palette metadata and handler
    fn register_command(&self, name: &str, descriptor: CommandDescriptor, handler: CommandHandler);
}
