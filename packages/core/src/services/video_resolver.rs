//! Video-Block Resolver
//!
//! Maps the user's current cursor position to the live video element of
//! the nearest ancestor block whose rendered subtree contains one.
//!
//! Notes are typically nested children of the block a video is attached
//! to (a "source" block), at arbitrary depth. The resolver walks strictly
//! upward one parent fetch at a time, testing each ancestor's rendered
//! subtree independently, and stops at the first qualifying ancestor -
//! never a farther one.
//!
//! # Failure model
//!
//! The resolver never returns an error: every miss (no active block,
//! broken parent chain, block not rendered, no video tag) is logged with
//! a distinguishing message and collapses to `None`.

use std::sync::Arc;

use crate::host::BlockAccessor;
use crate::models::ContentBlock;
use crate::render::{RenderLayer, VideoHandle};

/// Resolves the video element associated with the current block.
pub struct VideoResolver<B, R> {
    blocks: Arc<B>,
    render: Arc<R>,
}

impl<B, R> Clone for VideoResolver<B, R> {
    fn clone(&self) -> Self {
        Self {
            blocks: Arc::clone(&self.blocks),
            render: Arc::clone(&self.render),
        }
    }
}

impl<B, R> VideoResolver<B, R>
where
    B: BlockAccessor,
    R: RenderLayer,
{
    /// Create a resolver over the host's block tree and render layer
    pub fn new(blocks: Arc<B>, render: Arc<R>) -> Self {
        Self { blocks, render }
    }

    /// Resolve the live video element for the current cursor position.
    ///
    /// Returns `None` when no qualifying ancestor exists; the reason is
    /// logged at the point of failure.
    pub async fn resolve(&self) -> Option<VideoHandle> {
        let video_block = self.find_video_block().await?;

        // Defensive re-lookup: rendering may have changed between the
        // ancestor test and this use.
        let Some(node) = self.render.rendered_node(&video_block.id) else {
            tracing::warn!(block_id = %video_block.id, "video block has no rendered node");
            return None;
        };

        match node.first_video() {
            Some(video) => Some(video),
            None => {
                tracing::warn!(block_id = %video_block.id, "no video tag within rendered node");
                None
            }
        }
    }

    /// Walk the ancestor chain upward to the nearest block whose rendered
    /// subtree contains a video element.
    async fn find_video_block(&self) -> Option<ContentBlock> {
        let mut cursor = match self.blocks.current_block().await {
            Ok(Some(block)) => block,
            Ok(None) => {
                tracing::warn!("no active block at cursor");
                return None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "current block fetch failed");
                return None;
            }
        };

        loop {
            let Some(parent_id) = cursor.parent_id.clone() else {
                // Root reached without a match.
                tracing::warn!(block_id = %cursor.id, "no ancestor with a video found");
                return None;
            };

            let parent = match self.blocks.block_by_id(&parent_id).await {
                Ok(Some(parent)) => parent,
                Ok(None) => {
                    tracing::warn!(parent_id = %parent_id, "dangling parent reference");
                    return None;
                }
                Err(err) => {
                    tracing::warn!(parent_id = %parent_id, error = %err, "parent fetch failed");
                    return None;
                }
            };

            let has_video = self
                .render
                .rendered_node(&parent.id)
                .map(|node| node.contains_video())
                .unwrap_or(false);

            if has_video {
                tracing::debug!(block_id = %parent.id, "resolved video block");
                return Some(parent);
            }

            cursor = parent;
        }
    }
}
