//! Document graph core for block-based documents.
//!
//! A document arrives as a flat, id-indexed collection of [`Node`]s plus a
//! designated root id. This crate materializes that collection into a
//! [`Document`] index and layers the structural passes on top of it:
//!
//! - [`Document::visible_blocks`]: preorder traversal that sees through
//!   transparent layout containers and tolerates dangling child ids and
//!   reference cycles.
//! - [`Numbering`]: the ordinal side-table for numbered list items.
//! - [`heading_entries`]: heading-depth resolution for a table of contents.
//! - [`MarkIntervalTree`]: overlap queries over inline decoration marks.
//!
//! Nodes are immutable once loaded; the passes write only into their own
//! side state. One `Document` corresponds to one render invocation and is
//! not shared across renders.
//!
//! # Example
//!
//! ```
//! use blockpub_model::{Content, Document, Node, TextContent, TextStyle};
//!
//! let root = Node::new("root", Content::Root).with_children(["a"]);
//! let para = Node::new(
//!     "a",
//!     Content::Text(TextContent {
//!         text: "hello".to_owned(),
//!         style: TextStyle::Paragraph,
//!         ..TextContent::default()
//!     }),
//! );
//!
//! let doc = Document::build(vec![root, para], "root");
//! let order: Vec<&str> = doc
//!     .visible_blocks(doc.root_id())
//!     .iter()
//!     .map(|v| v.node.id.as_str())
//!     .collect();
//! assert_eq!(order, ["a"]);
//! ```

mod document;
mod marks;
mod node;
mod numbering;
mod toc;
mod traverse;

pub use document::Document;
pub use marks::{Mark, MarkIntervalTree, MarkKind, MarkRange};
pub use node::{
    Align, BookmarkContent, Content, DividerContent, DividerStyle, EmbedContent, EmbedProcessor,
    FileContent, FileKind, LayoutContent, LayoutStyle, LinkContent, Node, RelationContent,
    TableRowContent, TextContent, TextStyle, VerticalAlign,
};
pub use numbering::Numbering;
pub use toc::{HeadingEntry, UNTITLED, heading_entries};
pub use traverse::Visit;
