//! Document index: id → node lookup over a flat node collection.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::node::Node;

/// An id-indexed document: the sole owner of every [`Node`], plus a
/// designated root id and the document-level details map (property values
/// such as `name`, `description` and `featuredRelations`).
///
/// Child lists reference nodes by id, so a node may name a child absent
/// from the index; lookups return `None` and traversal skips the gap.
#[derive(Clone, Debug, Default)]
pub struct Document {
    nodes: HashMap<String, Node>,
    root_id: String,
    details: Map<String, Value>,
}

impl Document {
    /// Build the index from a flat node collection.
    ///
    /// O(n) map construction. A duplicate id keeps the last node seen and
    /// logs a warning; the collection is host-provided and rendering is
    /// best-effort around its defects.
    #[must_use]
    pub fn build(nodes: Vec<Node>, root_id: impl Into<String>) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if let Some(previous) = by_id.insert(node.id.clone(), node) {
                tracing::warn!(id = %previous.id, "duplicate node id, keeping last");
            }
        }
        Self {
            nodes: by_id,
            root_id: root_id.into(),
            details: Map::new(),
        }
    }

    /// Attach the document-level details map.
    #[must_use]
    pub fn with_details(mut self, details: Map<String, Value>) -> Self {
        self.details = details;
        self
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The designated root id.
    #[must_use]
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// The root node, when present in the index.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.nodes.get(&self.root_id)
    }

    /// Document-level details map.
    #[must_use]
    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// String-valued detail, if present.
    #[must_use]
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }

    /// Expand a node's child list, silently skipping dangling ids.
    #[must_use]
    pub fn children_of(&self, node: &Node) -> Vec<&Node> {
        node.children
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .collect()
    }

    /// Number of nodes in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::node::{Content, TextContent};

    fn text_node(id: &str, text: &str) -> Node {
        Node::new(
            id,
            Content::Text(TextContent {
                text: text.to_owned(),
                ..TextContent::default()
            }),
        )
    }

    #[test]
    fn test_build_indexes_by_id() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["a"]),
                text_node("a", "hello"),
            ],
            "root",
        );

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.root().map(|n| n.id.as_str()), Some("root"));
        assert_eq!(
            doc.get("a").and_then(Node::text).map(|t| t.text.as_str()),
            Some("hello")
        );
        assert!(doc.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_last() {
        let doc = Document::build(
            vec![text_node("a", "first"), text_node("a", "second")],
            "a",
        );

        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.get("a").and_then(Node::text).map(|t| t.text.as_str()),
            Some("second")
        );
    }

    #[test]
    fn test_children_of_skips_dangling_ids() {
        let doc = Document::build(
            vec![
                Node::new("root", Content::Root).with_children(["x", "missing", "y"]),
                text_node("x", "x"),
                text_node("y", "y"),
            ],
            "root",
        );

        let root = doc.root().expect("root present");
        let ids: Vec<&str> = doc.children_of(root).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["x", "y"]);
    }

    #[test]
    fn test_details_access() {
        let doc = Document::build(vec![Node::new("root", Content::Root)], "root").with_details(
            json!({ "name": "My page", "done": true })
                .as_object()
                .cloned()
                .expect("object literal"),
        );

        assert_eq!(doc.detail_str("name"), Some("My page"));
        assert_eq!(doc.detail_str("done"), None);
        assert_eq!(doc.detail_str("absent"), None);
    }
}
