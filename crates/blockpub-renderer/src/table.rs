//! Table builder.
//!
//! A table node has two container children: the column container first,
//! the row container second. Column widths come from each column node's
//! `width` field. The original documents occasionally lack one of the
//! containers; that degrades to an empty table rather than failing.

use blockpub_model::{Node, TableRowContent};
use serde::Serialize;

use crate::params::{BlockParams, ContentParams, vertical_align_class};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationResolver};

/// Column width when a column declares none.
const DEFAULT_COLUMN_WIDTH: u64 = 140;

/// Presentation parameters of a table block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableParams {
    /// Per-column pixel sizes, e.g. `"140px"`.
    pub column_sizes: Vec<String>,
    pub column_ids: Vec<String>,
    pub row_ids: Vec<String>,
}

/// Presentation parameters of a table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRowParams {
    pub is_header: bool,
    /// Cell ids; cells are rendered as nested blocks with
    /// [`cell_classes`](Renderer::cell_classes).
    pub cell_ids: Vec<String>,
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn table_block(&self, node: &Node) -> BlockParams {
        let columns = node.children.first().and_then(|id| self.document().get(id));
        let rows = node.children.get(1).and_then(|id| self.document().get(id));

        let content = match (columns, rows) {
            (Some(columns), Some(rows)) => {
                let column_sizes = self
                    .document()
                    .children_of(columns)
                    .iter()
                    .map(|col| {
                        let width = col.field_u64("width").unwrap_or(DEFAULT_COLUMN_WIDTH);
                        format!("{width}px")
                    })
                    .collect();
                ContentParams::Table(TableParams {
                    column_sizes,
                    column_ids: columns.children.clone(),
                    row_ids: rows.children.clone(),
                })
            }
            _ => {
                tracing::warn!(id = %node.id, "table is missing its column or row container");
                ContentParams::Table(TableParams::default())
            }
        };

        self.base_params(node, "blockTable", content)
    }

    pub(crate) fn table_row_block(&self, node: &Node, row: &TableRowContent) -> BlockParams {
        let content = ContentParams::TableRow(TableRowParams {
            is_header: row.is_header,
            cell_ids: node.children.clone(),
        });
        let mut params = self.base_params(node, "blockTableRow", content);
        if row.is_header {
            params.classes.push("isHeader".to_owned());
        }
        params
    }

    /// Classes for one table cell, combining both alignment hints.
    #[must_use]
    pub fn cell_classes(&self, cell_id: &str) -> Vec<String> {
        let mut classes = vec!["cell".to_owned()];
        if let Some(cell) = self.document().get(cell_id) {
            classes.push(format!("align-h{}", cell.align.index()));
            classes.push(vertical_align_class(cell.vertical_align));
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use blockpub_model::{Align, Content, Document, VerticalAlign};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::resolver::{NoAssets, NoRelations};

    use super::*;

    fn table_doc() -> Document {
        Document::build(
            vec![
                Node::new("table", Content::Table).with_children(["cols", "rows"]),
                Node::new("cols", Content::Layout(blockpub_model::LayoutContent::default()))
                    .with_children(["c1", "c2"]),
                Node::new("c1", Content::TableColumn).with_field("width", json!(210)),
                Node::new("c2", Content::TableColumn),
                Node::new("rows", Content::Layout(blockpub_model::LayoutContent::default()))
                    .with_children(["r1"]),
                Node::new("r1", Content::TableRow(TableRowContent { is_header: true }))
                    .with_children(["cell1"]),
                Node::new("cell1", Content::Text(blockpub_model::TextContent::default())),
            ],
            "table",
        )
    }

    #[test]
    fn test_column_sizes_with_default_width() {
        let doc = table_doc();
        let renderer = Renderer::new(&doc, &NoRelations, &NoAssets);
        let params = renderer.render_block("table").expect("present");

        assert_eq!(
            params.content,
            ContentParams::Table(TableParams {
                column_sizes: vec!["210px".to_owned(), "140px".to_owned()],
                column_ids: vec!["c1".to_owned(), "c2".to_owned()],
                row_ids: vec!["r1".to_owned()],
            })
        );
    }

    #[test]
    fn test_missing_containers_degrade_to_empty_table() {
        let doc = Document::build(vec![Node::new("table", Content::Table)], "table");
        let renderer = Renderer::new(&doc, &NoRelations, &NoAssets);
        let params = renderer.render_block("table").expect("present");

        assert_eq!(params.content, ContentParams::Table(TableParams::default()));
    }

    #[test]
    fn test_header_row_class() {
        let doc = table_doc();
        let renderer = Renderer::new(&doc, &NoRelations, &NoAssets);
        let params = renderer.render_block("r1").expect("present");

        assert!(params.classes.contains(&"isHeader".to_owned()));
        assert_eq!(
            params.content,
            ContentParams::TableRow(TableRowParams {
                is_header: true,
                cell_ids: vec!["cell1".to_owned()],
            })
        );
    }

    #[test]
    fn test_cell_classes_combine_alignments() {
        let mut doc_nodes = vec![Node::new("root", Content::Root).with_children(["cell"])];
        let mut cell = Node::new("cell", Content::Text(blockpub_model::TextContent::default()));
        cell.align = Align::Right;
        cell.vertical_align = VerticalAlign::Bottom;
        doc_nodes.push(cell);

        let doc = Document::build(doc_nodes, "root");
        let renderer = Renderer::new(&doc, &NoRelations, &NoAssets);
        assert_eq!(renderer.cell_classes("cell"), ["cell", "align-h2", "align-v2"]);
        assert_eq!(renderer.cell_classes("missing"), ["cell"]);
    }
}
