//! Presentation-parameter types shared across variant builders.

use blockpub_model::{Align, Node, VerticalAlign};
use serde::Serialize;

use crate::bookmark::BookmarkParams;
use crate::embed::EmbedParams;
use crate::featured::FeaturedRelationsParams;
use crate::file::FileParams;
use crate::link::LinkParams;
use crate::relation::RelationParams;
use crate::table::{TableParams, TableRowParams};
use crate::text::TextParams;
use crate::toc::TocParams;

/// Presentation parameters for one block, consumed by the template layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockParams {
    pub id: String,
    /// Stable type tag for the template layer (`"blockText"`, ...).
    pub block_type: &'static str,
    /// Outer wrapper classes: `block`, alignment, background color and
    /// the variant class.
    pub classes: Vec<String>,
    pub content: ContentParams,
    /// Child ids, for templates that recurse into nested blocks.
    pub children_ids: Vec<String>,
}

/// Variant-specific presentation parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ContentParams {
    Text(TextParams),
    Layout(LayoutParams),
    Divider(DividerParams),
    Link(LinkParams),
    Table(TableParams),
    TableRow(TableRowParams),
    TableColumn,
    Bookmark(BookmarkParams),
    File(FileParams),
    Relation(RelationParams),
    Embed(EmbedParams),
    FeaturedRelations(FeaturedRelationsParams),
    TableOfContents(TocParams),
    Root(RootParams),
    /// No builder applies; carries a diagnostic string for the caller to
    /// log. Never an error.
    Unsupported { diagnostic: String },
}

/// Parameters for a non-transparent layout container.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutParams {
    /// Layout style class (`layoutRow`, `layoutColumn`, ...).
    pub style_class: &'static str,
    /// Declared width fraction, when the document sets one.
    pub width: Option<f64>,
}

/// Parameters for a divider block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DividerParams {
    /// Divider style class (`divLine` or `divDot`).
    pub style_class: &'static str,
}

/// Parameters for the document root.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RootParams {
    /// Declared width fraction of the page, 0 when unset.
    pub width: f64,
}

/// Alignment class used in wrapper class lists (`align{n}`).
pub(crate) fn align_class(align: Align) -> String {
    format!("align{}", align.index())
}

/// Vertical alignment class for table cells (`align-v{n}`).
pub(crate) fn vertical_align_class(align: VerticalAlign) -> String {
    format!("align-v{}", align.index())
}

/// Background color classes, when the node declares a color token.
pub(crate) fn bg_color_class(node: &Node) -> Option<String> {
    node.background_color
        .as_deref()
        .filter(|color| !color.is_empty())
        .map(|color| format!("bgColor bgColor-{color}"))
}
