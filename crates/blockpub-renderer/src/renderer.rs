//! Central render dispatch.

use blockpub_model::{
    Content, DividerContent, DividerStyle, Document, HeadingEntry, LayoutContent, LayoutStyle,
    Node, Numbering, heading_entries,
};

use crate::params::{BlockParams, ContentParams, DividerParams, LayoutParams, RootParams};
use crate::params::{align_class, bg_color_class};
use crate::resolver::{AssetResolver, RelationResolver};

/// Render dispatch over one document.
///
/// Owns the per-render state (the [`Numbering`] side-table, built once in
/// [`new`](Self::new)) and borrows the document and the two resolver
/// collaborators. One `Renderer` serves exactly one render invocation;
/// concurrent renders each build their own.
pub struct Renderer<'a, R: RelationResolver, A: AssetResolver> {
    doc: &'a Document,
    relations: &'a R,
    assets: &'a A,
    numbering: Numbering,
}

impl<'a, R: RelationResolver, A: AssetResolver> Renderer<'a, R, A> {
    /// Bind a renderer to a document, running the numbering pass.
    #[must_use]
    pub fn new(doc: &'a Document, relations: &'a R, assets: &'a A) -> Self {
        Self {
            doc,
            relations,
            assets,
            numbering: Numbering::assign(doc),
        }
    }

    /// The bound document.
    #[must_use]
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// The ordinal side-table computed for this render.
    #[must_use]
    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    /// Heading entries for table-of-contents construction.
    #[must_use]
    pub fn heading_entries(&self) -> Vec<HeadingEntry> {
        heading_entries(self.doc)
    }

    /// Render one block by id.
    ///
    /// Returns `None` only for a dangling id; every present node yields
    /// parameters.
    #[must_use]
    pub fn render_block(&self, id: &str) -> Option<BlockParams> {
        self.doc.get(id).map(|node| self.block_params(node))
    }

    /// Total dispatch from a node to its presentation parameters.
    #[must_use]
    pub fn block_params(&self, node: &Node) -> BlockParams {
        match &node.content {
            Content::Text(text) => self.text_block(node, text),
            Content::Layout(layout) => self.layout_block(node, layout),
            Content::Divider(divider) => self.divider_block(node, divider),
            Content::Link(link) => self.link_block(node, link),
            Content::Table => self.table_block(node),
            Content::TableRow(row) => self.table_row_block(node, row),
            Content::TableColumn => {
                self.base_params(node, "blockTableColumn", ContentParams::TableColumn)
            }
            Content::Bookmark(bookmark) => self.bookmark_block(node, bookmark),
            Content::File(file) => self.file_block(node, file),
            Content::Relation(relation) => self.relation_block(node, relation),
            Content::Embed(embed) => self.embed_block(node, embed),
            Content::FeaturedRelations => self.featured_block(node),
            Content::TableOfContents => self.toc_block(node),
            Content::Root => self.root_block(node),
        }
    }

    /// Wrapper params shared by every variant: `block`, the alignment
    /// class, the variant tag class and an optional background color.
    pub(crate) fn base_params(
        &self,
        node: &Node,
        block_type: &'static str,
        content: ContentParams,
    ) -> BlockParams {
        let mut classes = vec!["block".to_owned(), align_class(node.align)];
        classes.push(block_type.to_owned());
        if let Some(bg) = bg_color_class(node) {
            classes.push(bg);
        }
        BlockParams {
            id: node.id.clone(),
            block_type,
            classes,
            content,
            children_ids: node.children.clone(),
        }
    }

    pub(crate) fn relations(&self) -> &'a R {
        self.relations
    }

    pub(crate) fn assets(&self) -> &'a A {
        self.assets
    }

    fn layout_block(&self, node: &Node, layout: &LayoutContent) -> BlockParams {
        let style_class = match layout.style {
            LayoutStyle::Row => "layoutRow",
            LayoutStyle::Column => "layoutColumn",
            LayoutStyle::Div => "layoutDiv",
            LayoutStyle::Header => "layoutHeader",
        };
        let content = ContentParams::Layout(LayoutParams {
            style_class,
            width: node.field_f64("width"),
        });
        let mut params = self.base_params(node, "blockLayout", content);
        params.classes.push(style_class.to_owned());
        params
    }

    fn divider_block(&self, node: &Node, divider: &DividerContent) -> BlockParams {
        let style_class = match divider.style {
            DividerStyle::Line => "divLine",
            DividerStyle::Dots => "divDot",
        };
        let content = ContentParams::Divider(DividerParams { style_class });
        let mut params = self.base_params(node, "blockDiv", content);
        params.classes.push(style_class.to_owned());
        params
    }

    fn root_block(&self, node: &Node) -> BlockParams {
        let width = node.field_f64("width").unwrap_or(0.0);
        self.base_params(node, "blockPage", ContentParams::Root(RootParams { width }))
    }
}
