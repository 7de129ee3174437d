//! Table-of-contents block builder.

use blockpub_model::{HeadingEntry, Node, heading_entries};
use serde::Serialize;

use crate::params::{BlockParams, ContentParams};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationResolver};

/// Presentation parameters of a table-of-contents block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TocParams {
    /// Heading entries in document order.
    pub items: Vec<HeadingEntry>,
    /// A document without headings renders an empty placeholder.
    pub is_empty: bool,
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn toc_block(&self, node: &Node) -> BlockParams {
        let items = heading_entries(self.document());
        let content = TocParams {
            is_empty: items.is_empty(),
            items,
        };
        self.base_params(node, "blockToc", ContentParams::TableOfContents(content))
    }
}

#[cfg(test)]
mod tests {
    use blockpub_model::{Content, Document, TextContent, TextStyle};
    use pretty_assertions::assert_eq;

    use crate::resolver::{NoAssets, NoRelations};

    use super::*;

    fn heading(id: &str, text: &str, style: TextStyle) -> Node {
        Node::new(
            id,
            Content::Text(TextContent {
                text: text.to_owned(),
                style,
                ..TextContent::default()
            }),
        )
    }

    #[test]
    fn test_toc_collects_headings_with_depths() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["h1", "h2", "toc"]),
                heading("h1", "Intro", TextStyle::Header1),
                heading("h2", "Details", TextStyle::Header2),
                Node::new("toc", Content::TableOfContents),
            ],
            "root",
        );
        let renderer = Renderer::new(&doc, &NoRelations, &NoAssets);
        let params = renderer.render_block("toc").expect("present");

        assert_eq!(
            params.content,
            ContentParams::TableOfContents(TocParams {
                items: vec![
                    HeadingEntry {
                        id: "h1".to_owned(),
                        label: "Intro".to_owned(),
                        depth: 0,
                    },
                    HeadingEntry {
                        id: "h2".to_owned(),
                        label: "Details".to_owned(),
                        depth: 1,
                    },
                ],
                is_empty: false,
            })
        );
    }

    #[test]
    fn test_toc_without_headings_is_empty() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["toc"]),
                Node::new("toc", Content::TableOfContents),
            ],
            "root",
        );
        let renderer = Renderer::new(&doc, &NoRelations, &NoAssets);
        let params = renderer.render_block("toc").expect("present");

        assert_eq!(
            params.content,
            ContentParams::TableOfContents(TocParams {
                items: vec![],
                is_empty: true,
            })
        );
    }
}
