//! Rendered-DOM Surface
//!
//! The host renders each `ContentBlock` into a DOM subtree tagged with a
//! structural attribute carrying the block's identifier. This module models
//! the read-only slice of that render tree the core needs:
//!
//! - [`RenderedNode`] - a snapshot node with tag, attributes, and children
//! - [`VideoHandle`] - a shared live handle to a video element's mutable state
//! - [`VideoStyle`] - the presentation properties the notes-mode toggle owns
//! - [`RenderLayer`] - the document-wide lookup capability the host provides
//!
//! Rendering may lag or be absent entirely (collapsed or off-screen blocks
//! have no DOM presence); lookups treat absence as a normal outcome.

mod node;
mod video;

pub use node::RenderedNode;
pub use video::{VideoHandle, VideoStyle};

/// Structural attribute linking a rendered node to its `ContentBlock`.
pub const BLOCK_ID_ATTR: &str = "data-block-id";

/// Document-wide render-tree lookup, as provided by the host.
///
/// A single query against the structural attribute index; no retry, no
/// mutation. `None` means the block currently has no DOM presence.
pub trait RenderLayer: Send + Sync {
    /// Resolve the rendered subtree for a block identifier.
    fn rendered_node(&self, block_id: &str) -> Option<RenderedNode>;
}

/// Snapshot of the currently rendered document tree.
///
/// Handles inside the snapshot are shared, so a `VideoHandle` pulled out of
/// a clone still refers to the same live element state.
#[derive(Debug, Clone, Default)]
pub struct DocumentView {
    root: Option<RenderedNode>,
}

impl DocumentView {
    /// Create a view over a rendered root node
    pub fn new(root: RenderedNode) -> Self {
        Self { root: Some(root) }
    }

    /// Create an empty view (nothing rendered)
    pub fn empty() -> Self {
        Self::default()
    }
}

impl RenderLayer for DocumentView {
    fn rendered_node(&self, block_id: &str) -> Option<RenderedNode> {
        self.root
            .as_ref()
            .and_then(|root| root.find_block(block_id))
            .cloned()
    }
}
