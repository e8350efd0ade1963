//! Rendered node snapshot tree

use std::collections::HashMap;

use super::video::VideoHandle;
use super::BLOCK_ID_ATTR;

/// A node in the rendered document snapshot.
///
/// Mirrors the shape of the host's DOM: a tag name, an attribute map, and
/// ordered children. Video elements additionally carry a [`VideoHandle`]
/// pointing at the live element state, shared across snapshot clones.
///
/// # Examples
///
/// ```rust
/// use videonotes_core::render::{RenderedNode, VideoHandle};
///
/// let subtree = RenderedNode::block("source-block")
///     .with_child(RenderedNode::video(VideoHandle::new(0.0)))
///     .with_child(RenderedNode::block("note-block"));
///
/// assert!(subtree.contains_video());
/// assert!(subtree.find_block("note-block").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RenderedNode {
    /// Element tag name (lowercase, e.g. "div", "video")
    pub tag: String,

    /// Element attributes, including the structural block-id attribute
    pub attributes: HashMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<RenderedNode>,

    /// Live element handle, present only on video nodes
    video: Option<VideoHandle>,
}

impl RenderedNode {
    /// Create a plain element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
            video: None,
        }
    }

    /// Create a block container node tagged with the structural attribute
    pub fn block(block_id: impl Into<String>) -> Self {
        Self::element("div").with_attr(BLOCK_ID_ATTR, block_id)
    }

    /// Create a video element node wrapping a live handle
    pub fn video(handle: VideoHandle) -> Self {
        let mut node = Self::element("video");
        node.video = Some(handle);
        node
    }

    /// Set an attribute (builder style)
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child node (builder style)
    pub fn with_child(mut self, child: RenderedNode) -> Self {
        self.children.push(child);
        self
    }

    /// The block identifier this node renders, if it is a block container
    pub fn block_id(&self) -> Option<&str> {
        self.attributes.get(BLOCK_ID_ATTR).map(String::as_str)
    }

    /// Find the rendered node for a block identifier within this subtree.
    ///
    /// Document-order depth-first search on the structural attribute.
    pub fn find_block(&self, block_id: &str) -> Option<&RenderedNode> {
        if self.block_id() == Some(block_id) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_block(block_id))
    }

    /// First video element within this subtree, in document order.
    pub fn first_video(&self) -> Option<VideoHandle> {
        if let Some(handle) = &self.video {
            return Some(handle.clone());
        }
        self.children.iter().find_map(|child| child.first_video())
    }

    /// Whether any video element is structurally present in this subtree.
    pub fn contains_video(&self) -> bool {
        self.first_video().is_some()
    }
}
