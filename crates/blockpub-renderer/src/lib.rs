//! Render dispatch: block nodes to presentation parameters.
//!
//! This crate turns every node of a [`blockpub_model::Document`] into a
//! [`BlockParams`] value for the downstream template layer. Dispatch is
//! total: a present node always yields parameters, degraded to an
//! [`ContentParams::Unsupported`] placeholder where no real builder
//! applies, and `None` only for a dangling id.
//!
//! Two collaborator traits connect the dispatch to its host:
//! [`RelationResolver`] for relation metadata and [`AssetResolver`] for
//! file, object and emoji URLs. Resolver failures degrade to placeholder
//! values and a warning; nothing recoverable propagates as an error.
//!
//! # Example
//!
//! ```
//! use blockpub_model::{Content, Document, Node};
//! use blockpub_renderer::{NoAssets, NoRelations, Renderer};
//!
//! let doc = Document::build(
//!     vec![Node::new("root", Content::Root).with_children(["a"])],
//!     "root",
//! );
//! let renderer = Renderer::new(&doc, &NoRelations, &NoAssets);
//! assert!(renderer.render_block("a").is_none()); // dangling id
//! ```

mod bookmark;
mod embed;
mod error;
mod featured;
mod file;
mod link;
mod params;
mod relation;
mod renderer;
mod resolver;
mod table;
mod text;
mod toc;

pub use bookmark::BookmarkParams;
pub use embed::EmbedParams;
pub use error::AssetError;
pub use featured::{FeaturedCell, FeaturedRelationsParams};
pub use file::FileParams;
pub use link::LinkParams;
pub use params::{BlockParams, ContentParams, DividerParams, LayoutParams, RootParams};
pub use relation::{RelationParams, RelationValue};
pub use renderer::Renderer;
pub use resolver::{AssetResolver, NoAssets, NoRelations, RelationFormat, RelationInfo, RelationResolver};
pub use table::{TableParams, TableRowParams};
pub use text::TextParams;
pub use toc::TocParams;
