//! Transparent-container-aware document traversal.
//!
//! Preorder descent over the id-reference graph that elides transparent
//! grouping containers from the emitted sequence while still descending
//! into their children. Both the numbering pass and the table-of-contents
//! pass consume this order.
//!
//! The walk is defensive where the document can be defective: dangling
//! child ids are skipped silently, and a child id already on the current
//! descent path stops descent there instead of recursing forever. Neither
//! condition aborts the traversal; the rest of the document still renders.

use std::collections::HashSet;

use crate::document::Document;
use crate::node::Node;

/// One emitted node of a traversal.
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    pub node: &'a Node,
    /// Whether any ancestor of this node (transitively) was an elided
    /// transparent container. Lets callers distinguish top-level content
    /// from content nested inside a grouping container.
    pub in_container: bool,
}

impl Document {
    /// Preorder traversal of the descendants of `start`, eliding
    /// transparent layout containers.
    ///
    /// The start node itself is not emitted. An elided container's
    /// children appear at the position the container would have occupied,
    /// in their original order.
    #[must_use]
    pub fn visible_blocks(&self, start: &str) -> Vec<Visit<'_>> {
        self.traverse_eliding(start, Node::is_transparent_container)
    }

    /// Preorder traversal of the descendants of `start`, eliding every
    /// node for which `is_transparent` returns true (but still descending
    /// into its children).
    #[must_use]
    pub fn traverse_eliding(
        &self,
        start: &str,
        is_transparent: impl Fn(&Node) -> bool,
    ) -> Vec<Visit<'_>> {
        let mut out = Vec::new();
        let Some(start_node) = self.get(start) else {
            return out;
        };
        let mut path = HashSet::new();
        path.insert(start_node.id.as_str());
        for child in &start_node.children {
            self.walk(child, false, &is_transparent, &mut path, &mut out);
        }
        out
    }

    fn walk<'a>(
        &'a self,
        id: &'a str,
        in_container: bool,
        is_transparent: &impl Fn(&Node) -> bool,
        path: &mut HashSet<&'a str>,
        out: &mut Vec<Visit<'a>>,
    ) {
        if path.contains(id) {
            tracing::warn!(id = %id, "reference cycle, stopping descent");
            return;
        }
        let Some(node) = self.get(id) else {
            // Dangling child id: an accepted document condition.
            return;
        };
        let transparent = is_transparent(node);
        if !transparent {
            out.push(Visit { node, in_container });
        }
        path.insert(node.id.as_str());
        for child in &node.children {
            self.walk(child, in_container || transparent, is_transparent, path, out);
        }
        path.remove(node.id.as_str());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::node::{Content, LayoutContent, LayoutStyle, Node, TextContent};

    use super::*;

    fn text_node(id: &str) -> Node {
        Node::new(id, Content::Text(TextContent::default()))
    }

    fn div_node(id: &str) -> Node {
        Node::new(
            id,
            Content::Layout(LayoutContent {
                style: LayoutStyle::Div,
            }),
        )
    }

    fn ids<'a>(visits: &'a [Visit<'a>]) -> Vec<&'a str> {
        visits.iter().map(|v| v.node.id.as_str()).collect()
    }

    #[test]
    fn test_preorder_with_nested_children() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["a", "b"]),
                text_node("a").with_children(["a1", "a2"]),
                text_node("a1"),
                text_node("a2"),
                text_node("b"),
            ],
            "root",
        );

        assert_eq!(ids(&doc.visible_blocks("root")), ["a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_transparent_container_elided_children_in_place() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["a", "div", "d"]),
                text_node("a"),
                div_node("div").with_children(["b", "c"]),
                text_node("b"),
                text_node("c"),
                text_node("d"),
            ],
            "root",
        );

        let visits = doc.visible_blocks("root");
        assert_eq!(ids(&visits), ["a", "b", "c", "d"]);

        let flags: Vec<bool> = visits.iter().map(|v| v.in_container).collect();
        assert_eq!(flags, [false, true, true, false]);
    }

    #[test]
    fn test_container_flag_is_transitive() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["div"]),
                div_node("div").with_children(["a"]),
                text_node("a").with_children(["a1"]),
                text_node("a1"),
            ],
            "root",
        );

        let visits = doc.visible_blocks("root");
        assert_eq!(ids(&visits), ["a", "a1"]);
        assert!(visits.iter().all(|v| v.in_container));
    }

    #[test]
    fn test_non_div_layout_is_not_elided() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["row"]),
                Node::new(
                    "row",
                    Content::Layout(LayoutContent {
                        style: LayoutStyle::Row,
                    }),
                )
                .with_children(["a"]),
                text_node("a"),
            ],
            "root",
        );

        assert_eq!(ids(&doc.visible_blocks("root")), ["row", "a"]);
    }

    #[test]
    fn test_dangling_child_skipped_silently() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["x", "missing", "y"]),
                text_node("x"),
                text_node("y"),
            ],
            "root",
        );

        assert_eq!(ids(&doc.visible_blocks("root")), ["x", "y"]);
    }

    #[test]
    fn test_cycle_terminates_and_emits_each_node_once() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["a"]),
                text_node("a").with_children(["b"]),
                text_node("b").with_children(["a"]),
            ],
            "root",
        );

        assert_eq!(ids(&doc.visible_blocks("root")), ["a", "b"]);
    }

    #[test]
    fn test_self_cycle_terminates() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["a"]),
                text_node("a").with_children(["a"]),
            ],
            "root",
        );

        assert_eq!(ids(&doc.visible_blocks("root")), ["a"]);
    }

    #[test]
    fn test_shared_node_in_two_branches_is_emitted_twice() {
        // Only path cycles are guarded; diamond references are legal.
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["a", "b"]),
                text_node("a").with_children(["shared"]),
                text_node("b").with_children(["shared"]),
                text_node("shared"),
            ],
            "root",
        );

        assert_eq!(ids(&doc.visible_blocks("root")), ["a", "shared", "b", "shared"]);
    }

    #[test]
    fn test_missing_start_yields_empty() {
        let doc = Document::build(vec![text_node("a")], "root");
        assert!(doc.visible_blocks("root").is_empty());
    }
}
