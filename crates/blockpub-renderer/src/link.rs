//! Link block builder.

use blockpub_model::{LinkContent, Node};
use serde::Serialize;

use crate::params::{BlockParams, ContentParams};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationResolver};

/// Presentation parameters of a link block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkParams {
    /// Id of the linked document object.
    pub target_id: String,
    /// Resolved deep link, empty when resolution failed.
    pub href: String,
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn link_block(&self, node: &Node, link: &LinkContent) -> BlockParams {
        let href = match self.assets().object_link(&link.target_block_id) {
            Ok(href) => href,
            Err(err) => {
                tracing::warn!(
                    id = %node.id,
                    target = %link.target_block_id,
                    error = %err,
                    "failed to resolve link target"
                );
                String::new()
            }
        };
        let content = ContentParams::Link(LinkParams {
            target_id: link.target_block_id.clone(),
            href,
        });
        self.base_params(node, "blockLink", content)
    }
}
