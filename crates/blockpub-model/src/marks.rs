//! Inline decoration marks and the augmented interval tree over them.
//!
//! A text node carries zero or more [`Mark`]s, each decorating a half-open
//! character range. Ranges come with no guarantees: they may be empty,
//! touching, nested or partially overlapping, in any order. The
//! [`MarkIntervalTree`] answers "which marks cover this range" queries
//! without sorting the input.
//!
//! The tree is deliberately unbalanced: insertion order determines its
//! shape, which keeps construction trivial and is fine for the small
//! per-node mark counts seen in practice.

use serde::{Deserialize, Serialize};

/// Half-open character range `[from, to)` within a text node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkRange {
    pub from: u32,
    pub to: u32,
}

impl MarkRange {
    /// Create a range. Callers are expected to keep `from <= to`.
    #[must_use]
    pub fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    /// Overlap predicate for decoration ranges.
    ///
    /// Two half-open ranges overlap when they share at least one position,
    /// or when they are exactly equal. The equal case matters for
    /// zero-length ranges, which would otherwise never match anything —
    /// including themselves.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        (self.from < other.to && self.to > other.from)
            || (self.from == other.from && self.to == other.to)
    }
}

/// Style payload kind of a decoration mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkKind {
    #[default]
    Bold,
    Italic,
    Strikethrough,
    Keyboard,
    Underline,
    Link,
    TextColor,
    BackgroundColor,
    Mention,
    Emoji,
    Object,
}

/// One inline decoration over a text node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    pub range: MarkRange,
    #[serde(rename = "type")]
    pub kind: MarkKind,
    /// Kind-specific payload: link URL, color token, mention target id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param: String,
}

impl Default for MarkRange {
    fn default() -> Self {
        Self { from: 0, to: 0 }
    }
}

impl Mark {
    /// Create a mark with no payload.
    #[must_use]
    pub fn new(from: u32, to: u32, kind: MarkKind) -> Self {
        Self {
            range: MarkRange::new(from, to),
            kind,
            param: String::new(),
        }
    }
}

/// Augmented interval tree over decoration marks, keyed by range start.
///
/// Built by repeated insertion in input order; the first mark becomes the
/// root and no rebalancing is performed. Every tree node tracks the
/// maximum range upper bound within its subtree, so whole subtrees are
/// skipped once they cannot reach the query.
///
/// # Panics
///
/// [`build`](Self::build) panics when called with an empty slice. A text
/// node with zero marks must skip tree construction entirely; reaching
/// construction with no marks is a caller bug, not a document condition.
#[derive(Clone, Debug)]
pub struct MarkIntervalTree {
    root: TreeNode,
}

#[derive(Clone, Debug)]
struct TreeNode {
    mark: Mark,
    max_upper: u32,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl MarkIntervalTree {
    /// Build a tree from marks in input order.
    #[must_use]
    pub fn build(marks: &[Mark]) -> Self {
        let Some((first, rest)) = marks.split_first() else {
            panic!("MarkIntervalTree::build requires at least one mark");
        };
        let mut tree = Self {
            root: TreeNode::leaf(first.clone()),
        };
        for mark in rest {
            tree.insert(mark.clone());
        }
        tree
    }

    /// Insert one mark, updating subtree maxima along the descent.
    ///
    /// A mark with a strictly smaller `from` than the current node goes
    /// left; ties and larger values go right.
    pub fn insert(&mut self, mark: Mark) {
        self.root.insert(mark);
    }

    /// All marks whose range overlaps `query`, in tree in-order position.
    ///
    /// The result is exactly the set of marks satisfying
    /// [`MarkRange::overlaps`] against `query`; the order reflects tree
    /// position (left subtree, node, right subtree), not range start.
    #[must_use]
    pub fn overlaps(&self, query: MarkRange) -> Vec<Mark> {
        let mut found = Vec::new();
        self.root.collect_overlaps(query, &mut found);
        found
    }
}

impl TreeNode {
    fn leaf(mark: Mark) -> Self {
        let max_upper = mark.range.to;
        Self {
            mark,
            max_upper,
            left: None,
            right: None,
        }
    }

    fn insert(&mut self, mark: Mark) {
        self.max_upper = self.max_upper.max(mark.range.to);
        let child = if mark.range.from < self.mark.range.from {
            &mut self.left
        } else {
            &mut self.right
        };
        match child {
            Some(next) => next.insert(mark),
            None => *child = Some(Box::new(Self::leaf(mark))),
        }
    }

    fn collect_overlaps(&self, query: MarkRange, found: &mut Vec<Mark>) {
        // Nothing in this subtree reaches the query's lower bound.
        if self.max_upper < query.from {
            return;
        }
        if let Some(left) = &self.left {
            left.collect_overlaps(query, found);
        }
        if self.mark.range.overlaps(query) {
            found.push(self.mark.clone());
        }
        // Everything to the right starts at or after this node's `from`;
        // once the query ends there too, no further overlap is possible.
        if query.from < self.mark.range.from && query.to <= self.mark.range.from {
            return;
        }
        if let Some(right) = &self.right {
            right.collect_overlaps(query, found);
        }
    }
}
