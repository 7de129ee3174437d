//! Block node data model.
//!
//! A [`Node`] is one unit of document content: a string id, a tagged
//! content payload, an ordered list of child ids and optional presentation
//! hints. Children are references by id into the document index, never
//! owned pointers, so a node may name a child that is absent from the
//! document — consumers tolerate that.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::marks::Mark;

/// One block of document content.
///
/// Immutable once loaded. Variant-specific metadata that has no dedicated
/// field (declared width, embed subtype, ...) lives in the opaque
/// [`fields`](Self::fields) map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique id within a document.
    pub id: String,
    /// Content payload, tagged by variant.
    pub content: Content,
    /// Ordered child references by id. May contain dangling ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    /// Horizontal alignment hint.
    #[serde(default)]
    pub align: Align,
    /// Vertical alignment hint (table cells).
    #[serde(default)]
    pub vertical_align: VerticalAlign,
    /// Background color token, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Opaque variant-specific metadata.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}

impl Node {
    /// Create a node with the given id and content and no children.
    #[must_use]
    pub fn new(id: impl Into<String>, content: Content) -> Self {
        Self {
            id: id.into(),
            content,
            children: Vec::new(),
            align: Align::default(),
            vertical_align: VerticalAlign::default(),
            background_color: None,
            fields: Map::new(),
        }
    }

    /// Replace the child id list.
    #[must_use]
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Set a variant-specific metadata field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Text payload, if this is a text node.
    #[must_use]
    pub fn text(&self) -> Option<&TextContent> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric metadata field, if present and numeric.
    #[must_use]
    pub fn field_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    /// Integer metadata field, if present and numeric.
    #[must_use]
    pub fn field_u64(&self, key: &str) -> Option<u64> {
        self.fields.get(key).and_then(Value::as_u64)
    }

    /// String metadata field, if present.
    #[must_use]
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Whether this node is a transparent grouping container: a layout
    /// node with the [`LayoutStyle::Div`] style. Such nodes are elided
    /// from logical traversal order.
    #[must_use]
    pub fn is_transparent_container(&self) -> bool {
        matches!(
            &self.content,
            Content::Layout(layout) if layout.style == LayoutStyle::Div
        )
    }
}

/// Content payload of a [`Node`], tagged by variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Content {
    /// Inline text with a style tag and decoration marks.
    Text(TextContent),
    /// Grouping container for layout purposes.
    Layout(LayoutContent),
    /// Horizontal divider.
    Divider(DividerContent),
    /// Reference to another document object.
    Link(LinkContent),
    /// Simple table. First child is the column container, second the row
    /// container.
    Table,
    /// Table row; children are cell ids.
    TableRow(TableRowContent),
    /// Table column; carries its declared width in `fields`.
    TableColumn,
    /// External web bookmark card.
    Bookmark(BookmarkContent),
    /// Attached file or media object.
    File(FileContent),
    /// Reference to a relation (property) of the document.
    Relation(RelationContent),
    /// Embedded media or diagram source.
    Embed(EmbedContent),
    /// Strip of the document's featured relation values.
    FeaturedRelations,
    /// Generated table of contents.
    TableOfContents,
    /// Document root.
    Root,
}

/// Text node payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// Raw text content.
    #[serde(default)]
    pub text: String,
    /// Style tag (paragraph, heading, list item, ...).
    #[serde(default)]
    pub style: TextStyle,
    /// Checkbox state, meaningful for [`TextStyle::Checkbox`].
    #[serde(default)]
    pub checked: bool,
    /// Inline decoration marks over character positions of `text`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

/// Style tag of a text node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyle {
    #[default]
    Paragraph,
    Header1,
    Header2,
    Header3,
    Header4,
    Quote,
    Code,
    Title,
    Description,
    Checkbox,
    Bulleted,
    Numbered,
    Toggle,
    Callout,
}

/// Layout container payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutContent {
    #[serde(default)]
    pub style: LayoutStyle,
}

/// Style of a layout container. [`Div`](Self::Div) is the transparent
/// grouping kind elided from traversal order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutStyle {
    #[default]
    Row,
    Column,
    Div,
    Header,
}

/// Divider payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerContent {
    #[serde(default)]
    pub style: DividerStyle,
}

/// Divider rendering style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DividerStyle {
    #[default]
    Line,
    Dots,
}

/// Link node payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkContent {
    /// Id of the target document object.
    #[serde(default)]
    pub target_block_id: String,
}

/// Table row payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRowContent {
    #[serde(default)]
    pub is_header: bool,
}

/// Bookmark card payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkContent {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Asset reference for the site favicon.
    #[serde(default)]
    pub favicon_hash: String,
    /// Asset reference for the preview image.
    #[serde(default)]
    pub image_hash: String,
}

/// File node payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    /// Id of the file object, resolved through the asset resolver.
    #[serde(default)]
    pub target_object_id: String,
    #[serde(default)]
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub kind: FileKind,
}

/// Media kind of a file node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileKind {
    #[default]
    File,
    Image,
    Video,
    Audio,
    Pdf,
}

/// Relation reference payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationContent {
    /// Relation key, resolved through the relation resolver.
    #[serde(default)]
    pub key: String,
}

/// Embed node payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedContent {
    #[serde(default)]
    pub processor: EmbedProcessor,
    /// Embed source: a URL, iframe markup or diagram code, depending on
    /// the processor.
    #[serde(default)]
    pub text: String,
}

/// Embed processor kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmbedProcessor {
    #[default]
    Latex,
    Mermaid,
    Graphviz,
    Youtube,
    Vimeo,
    GoogleMaps,
    Miro,
    Figma,
    OpenStreetMap,
    Telegram,
    Codepen,
    Bilibili,
    Kroki,
    GithubGist,
    Sketchfab,
    Excalidraw,
}

/// Horizontal alignment hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    /// Numeric index used in presentation class names (`align{n}`).
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
            Self::Justify => 3,
        }
    }
}

/// Vertical alignment hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// Numeric index used in presentation class names (`align-v{n}`).
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Top => 0,
            Self::Middle => 1,
            Self::Bottom => 2,
        }
    }
}
