//! Heading-depth resolution for a table of contents.
//!
//! Depth is synthetic: it is derived from which heading levels have been
//! seen so far in document order, not from tree nesting. An H2 appearing
//! before any H1 sits at depth 0; an H1 resets the level-2 tracking so a
//! following H3 starts back at the H1 baseline.

use serde::Serialize;

use crate::document::Document;
use crate::node::{Content, TextStyle};

/// Placeholder label for headings (and other nameless objects) with no
/// text of their own.
pub const UNTITLED: &str = "Untitled";

/// One table-of-contents entry, produced fresh per render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    pub id: String,
    pub label: String,
    /// Zero-based indentation depth.
    pub depth: u8,
}

/// Collect heading entries in transparent-elided traversal order.
#[must_use]
pub fn heading_entries(doc: &Document) -> Vec<HeadingEntry> {
    let mut entries = Vec::new();
    let mut seen_h1 = false;
    let mut seen_h2 = false;

    for visit in doc.visible_blocks(doc.root_id()) {
        let Content::Text(text) = &visit.node.content else {
            continue;
        };
        let depth = match text.style {
            TextStyle::Header1 => {
                seen_h1 = true;
                seen_h2 = false;
                0
            }
            TextStyle::Header2 => {
                seen_h2 = true;
                u8::from(seen_h1)
            }
            TextStyle::Header3 => u8::from(seen_h1) + u8::from(seen_h2),
            _ => continue,
        };
        let label = if text.text.is_empty() {
            UNTITLED.to_owned()
        } else {
            text.text.clone()
        };
        entries.push(HeadingEntry {
            id: visit.node.id.clone(),
            label,
            depth,
        });
    }

    entries
}
