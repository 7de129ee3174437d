//! Bookmark card builder.

use blockpub_model::{BookmarkContent, Node};
use serde::Serialize;

use crate::params::{BlockParams, ContentParams};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationResolver};

/// Presentation parameters of a bookmark card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookmarkParams {
    /// A bookmark without a URL renders as an empty placeholder card.
    pub is_empty: bool,
    pub url: String,
    pub title: String,
    pub description: String,
    /// Resolved favicon URL, empty when unavailable.
    pub favicon: String,
    /// Resolved preview image URL, empty when unavailable.
    pub image: String,
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn bookmark_block(&self, node: &Node, bookmark: &BookmarkContent) -> BlockParams {
        let content = if bookmark.url.is_empty() {
            BookmarkParams {
                is_empty: true,
                ..BookmarkParams::default()
            }
        } else {
            BookmarkParams {
                is_empty: false,
                url: bookmark.url.clone(),
                title: bookmark.title.clone(),
                description: bookmark.description.clone(),
                favicon: self.optional_file_url(&node.id, &bookmark.favicon_hash),
                image: self.optional_file_url(&node.id, &bookmark.image_hash),
            }
        };
        self.base_params(node, "blockBookmark", ContentParams::Bookmark(content))
    }

    /// Resolve an optional asset reference, degrading to an empty URL.
    fn optional_file_url(&self, block_id: &str, asset_id: &str) -> String {
        if asset_id.is_empty() {
            return String::new();
        }
        match self.assets().file_url(asset_id) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(id = %block_id, asset = %asset_id, error = %err, "failed to resolve bookmark asset");
                String::new()
            }
        }
    }
}
