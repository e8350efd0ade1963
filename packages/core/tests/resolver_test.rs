//! Integration tests for the video-block resolver
//!
//! Tests cover:
//! - Nearest-ancestor resolution at varying chain depths
//! - Misses (no current block, no video anywhere, dangling parents)
//! - Unrendered ancestors being walked past
//! - Host fetch failures degrading to "none"

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use videonotes_core::{
    host::{BlockAccessor, HostError},
    models::ContentBlock,
    render::{DocumentView, RenderedNode, VideoHandle},
    services::VideoResolver,
};

/// Block tree backed by a map, with a configurable cursor position.
#[derive(Default)]
struct MockBlockTree {
    blocks: HashMap<String, ContentBlock>,
    current: Option<String>,
    fail_fetches: bool,
}

impl MockBlockTree {
    fn insert(&mut self, id: &str, parent_id: Option<&str>) {
        self.blocks.insert(
            id.to_string(),
            ContentBlock::new_with_id(
                id.to_string(),
                format!("content of {id}"),
                parent_id.map(str::to_string),
                json!({}),
            ),
        );
    }

    fn with_cursor(mut self, id: &str) -> Self {
        self.current = Some(id.to_string());
        self
    }
}

#[async_trait]
impl BlockAccessor for MockBlockTree {
    async fn current_block(&self) -> Result<Option<ContentBlock>, HostError> {
        if self.fail_fetches {
            return Err(HostError::block_fetch_failed("mock outage"));
        }
        Ok(self
            .current
            .as_ref()
            .and_then(|id| self.blocks.get(id))
            .cloned())
    }

    async fn block_by_id(&self, id: &str) -> Result<Option<ContentBlock>, HostError> {
        if self.fail_fetches {
            return Err(HostError::block_fetch_failed("mock outage"));
        }
        Ok(self.blocks.get(id).cloned())
    }
}

/// Test helper: a chain root -> ... -> leaf with the cursor on the leaf.
fn chain(ids: &[&str]) -> MockBlockTree {
    let mut tree = MockBlockTree::default();
    let mut parent: Option<&str> = None;
    for id in ids {
        tree.insert(id, parent);
        parent = Some(id);
    }
    tree.with_cursor(ids[ids.len() - 1])
}

fn resolver(
    tree: MockBlockTree,
    view: DocumentView,
) -> VideoResolver<MockBlockTree, DocumentView> {
    VideoResolver::new(Arc::new(tree), Arc::new(view))
}

#[tokio::test]
async fn test_resolves_video_on_parent() -> Result<()> {
    let tree = chain(&["source", "note"]);
    let video = VideoHandle::new(42.0);
    let view = DocumentView::new(
        RenderedNode::block("source")
            .with_child(RenderedNode::video(video.clone()))
            .with_child(RenderedNode::block("note")),
    );

    let resolved = resolver(tree, view).resolve().await;
    assert!(resolved.unwrap().same_element(&video));
    Ok(())
}

#[tokio::test]
async fn test_resolves_video_at_arbitrary_depth() -> Result<()> {
    let tree = chain(&["source", "a", "b", "c", "d", "leaf"]);
    let video = VideoHandle::new(1.0);
    let view = DocumentView::new(
        RenderedNode::block("source")
            .with_child(RenderedNode::video(video.clone()))
            .with_child(
                RenderedNode::block("a").with_child(
                    RenderedNode::block("b").with_child(
                        RenderedNode::block("c")
                            .with_child(RenderedNode::block("d").with_child(RenderedNode::block("leaf"))),
                    ),
                ),
            ),
    );

    let resolved = resolver(tree, view).resolve().await;
    assert!(resolved.unwrap().same_element(&video));
    Ok(())
}

#[tokio::test]
async fn test_nearest_qualifying_ancestor_wins() -> Result<()> {
    let tree = chain(&["far", "near", "leaf"]);
    let far_video = VideoHandle::new(10.0);
    let near_video = VideoHandle::new(20.0);
    let view = DocumentView::new(
        RenderedNode::block("far")
            .with_child(RenderedNode::video(far_video))
            .with_child(
                RenderedNode::block("near")
                    .with_child(RenderedNode::video(near_video.clone()))
                    .with_child(RenderedNode::block("leaf")),
            ),
    );

    let resolved = resolver(tree, view).resolve().await;
    assert!(resolved.unwrap().same_element(&near_video));
    Ok(())
}

#[tokio::test]
async fn test_no_video_anywhere_yields_none() -> Result<()> {
    let tree = chain(&["root", "mid", "leaf"]);
    let view = DocumentView::new(
        RenderedNode::block("root")
            .with_child(RenderedNode::block("mid").with_child(RenderedNode::block("leaf"))),
    );

    assert!(resolver(tree, view).resolve().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_no_current_block_yields_none() -> Result<()> {
    let mut tree = MockBlockTree::default();
    tree.insert("lonely", None);
    // Cursor never set.
    let view = DocumentView::new(RenderedNode::block("lonely"));

    assert!(resolver(tree, view).resolve().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_dangling_parent_reference_yields_none() -> Result<()> {
    let mut tree = MockBlockTree::default();
    tree.insert("leaf", Some("ghost"));
    let tree = tree.with_cursor("leaf");
    let view = DocumentView::new(
        RenderedNode::block("leaf").with_child(RenderedNode::video(VideoHandle::new(5.0))),
    );

    // The video sits on the leaf itself, but resolution only ever tests
    // ancestors, and the chain is broken.
    assert!(resolver(tree, view).resolve().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_unrendered_ancestor_is_walked_past() -> Result<()> {
    let tree = chain(&["source", "collapsed", "leaf"]);
    let video = VideoHandle::new(9.0);
    // "collapsed" has no DOM presence at all; "source" renders the video.
    let view = DocumentView::new(
        RenderedNode::block("source")
            .with_child(RenderedNode::video(video.clone()))
            .with_child(RenderedNode::block("leaf")),
    );

    let resolved = resolver(tree, view).resolve().await;
    assert!(resolved.unwrap().same_element(&video));
    Ok(())
}

#[tokio::test]
async fn test_video_block_not_rendered_yields_none() -> Result<()> {
    let tree = chain(&["source", "leaf"]);
    // Nothing rendered at all: the ancestor test can never pass.
    let view = DocumentView::empty();

    assert!(resolver(tree, view).resolve().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_fetch_failure_degrades_to_none() -> Result<()> {
    let mut tree = chain(&["source", "leaf"]);
    tree.fail_fetches = true;
    let view = DocumentView::new(
        RenderedNode::block("source").with_child(RenderedNode::video(VideoHandle::new(3.0))),
    );

    assert!(resolver(tree, view).resolve().await.is_none());
    Ok(())
}
