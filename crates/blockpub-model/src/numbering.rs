//! Ordinal assignment for numbered list items.
//!
//! A single forward pass over the transparent-elided traversal order
//! assigns 1-based ordinals to numbered text nodes. The counter is global
//! to the pass, not scoped per subtree: a numbered item nested under
//! another numbered item continues the sequence unless a non-numbered
//! text node was visited in between. Non-text nodes are neutral.

use std::collections::HashMap;

use crate::document::Document;
use crate::node::{Content, TextStyle};

/// Side-table of assigned ordinals, keyed by node id.
///
/// Populated monotonically: an ordinal, once assigned, is never changed
/// or reused, so re-running the pass over the same document leaves the
/// table untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Numbering {
    ordinals: HashMap<String, u32>,
}

impl Numbering {
    /// Run the numbering pass over `doc` from its root.
    #[must_use]
    pub fn assign(doc: &Document) -> Self {
        let mut numbering = Self::default();
        numbering.refresh(doc);
        numbering
    }

    /// Re-run the pass, assigning ordinals only to ids not yet present.
    pub fn refresh(&mut self, doc: &Document) {
        let mut next = 1u32;
        for visit in doc.visible_blocks(doc.root_id()) {
            let Content::Text(text) = &visit.node.content else {
                continue;
            };
            if text.style == TextStyle::Numbered {
                if !self.ordinals.contains_key(visit.node.id.as_str()) {
                    self.ordinals.insert(visit.node.id.clone(), next);
                    next += 1;
                }
            } else {
                next = 1;
            }
        }
    }

    /// Ordinal assigned to a node, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<u32> {
        self.ordinals.get(id).copied()
    }

    /// Number of assigned ordinals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    /// Whether no ordinal has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }
}
