//! Content Block Structures
//!
//! This module defines the `ContentBlock` struct mirroring the host
//! editor's outline model: a node in the document tree, linked upward
//! through `parent_id`.
//!
//! The host creates and destroys blocks as the user edits; this crate
//! never persists a reference beyond a single resolution call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node in the host's hierarchical document/outline model.
///
/// # Fields
///
/// - `id`: Unique identifier (UUID string)
/// - `content`: Primary content/text of the block
/// - `parent_id`: Optional reference to the parent block
/// - `created_at` / `modified_at`: Host-maintained timestamps
/// - `properties`: JSON object with host-specific fields
///
/// # Examples
///
/// ```rust
/// use videonotes_core::models::ContentBlock;
/// use serde_json::json;
///
/// let source = ContentBlock::new("Lecture recording".to_string(), None, json!({}));
/// let note = ContentBlock::new(
///     "Key point at 2:05".to_string(),
///     Some(source.id.clone()),
///     json!({}),
/// );
/// assert!(!note.is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Unique identifier
    pub id: String,

    /// Primary content/text of the block
    pub content: String,

    /// Parent block ID (None for document roots)
    pub parent_id: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,

    /// Host-specific fields (collapsed state, block type, etc.)
    pub properties: serde_json::Value,
}

impl ContentBlock {
    /// Create a new block with an auto-generated UUID
    pub fn new(content: String, parent_id: Option<String>, properties: serde_json::Value) -> Self {
        Self::new_with_id(
            Uuid::new_v4().to_string(),
            content,
            parent_id,
            properties,
        )
    }

    /// Create a new block with an explicit ID
    pub fn new_with_id(
        id: String,
        content: String,
        parent_id: Option<String>,
        properties: serde_json::Value,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            content,
            parent_id,
            created_at: now,
            modified_at: now,
            properties,
        }
    }

    /// Check if this block is a document root (no parent reference)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
