//! Featured-relations strip builder.
//!
//! Renders the document's featured relation values as a row of cells.
//! The key list comes from the `featuredRelations` detail; unknown keys
//! are skipped entirely, known keys without a value render as empty
//! cells. List-valued formats show their first item plus a `+N` overflow
//! marker.

use blockpub_model::{Node, UNTITLED};
use serde::Serialize;
use serde_json::Value;

use crate::params::{BlockParams, ContentParams};
use crate::relation::{RelationValue, relation_value};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationResolver};

/// Presentation parameters of the featured-relations strip.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeaturedRelationsParams {
    pub cells: Vec<FeaturedCell>,
}

/// One cell of the featured-relations strip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeaturedCell {
    pub name: String,
    pub format_class: &'static str,
    pub is_empty: bool,
    pub value: Option<RelationValue>,
    /// Overflow marker (`"+2"`) for list values beyond the first item.
    pub more: Option<String>,
    /// Whether this is the final cell of the strip.
    pub last: bool,
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn featured_block(&self, node: &Node) -> BlockParams {
        let keys: Vec<&str> = self
            .document()
            .details()
            .get("featuredRelations")
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut cells = Vec::with_capacity(keys.len());
        for key in keys {
            let Some(info) = self.relations().relation_info(key) else {
                continue;
            };
            let name = if info.name.is_empty() {
                UNTITLED.to_owned()
            } else {
                info.name
            };
            let mut value = self
                .document()
                .details()
                .get(key)
                .and_then(|raw| relation_value(info.format, raw));
            let mut more = None;
            if let Some(RelationValue::Items(items)) = &mut value {
                if items.len() > 1 {
                    more = Some(format!("+{}", items.len() - 1));
                    items.truncate(1);
                }
            }
            cells.push(FeaturedCell {
                name,
                format_class: info.format.class(),
                is_empty: value.is_none(),
                value,
                more,
                last: false,
            });
        }
        if let Some(cell) = cells.last_mut() {
            cell.last = true;
        }

        self.base_params(
            node,
            "blockFeatured",
            ContentParams::FeaturedRelations(FeaturedRelationsParams { cells }),
        )
    }
}

#[cfg(test)]
mod tests {
    use blockpub_model::{Content, Document};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::resolver::{NoAssets, RelationFormat, RelationInfo, RelationResolver};

    use super::*;

    struct PageRelations;

    impl RelationResolver for PageRelations {
        fn relation_info(&self, key: &str) -> Option<RelationInfo> {
            match key {
                "tag" => Some(RelationInfo {
                    name: "Tag".to_owned(),
                    format: RelationFormat::Tag,
                }),
                "done" => Some(RelationInfo {
                    name: "Done".to_owned(),
                    format: RelationFormat::Checkbox,
                }),
                _ => None,
            }
        }
    }

    fn featured_doc(details: serde_json::Value) -> Document {
        Document::build(
            vec![Node::new("fr", Content::FeaturedRelations)],
            "fr",
        )
        .with_details(details.as_object().cloned().expect("object literal"))
    }

    fn unwrap_featured(params: BlockParams) -> FeaturedRelationsParams {
        match params.content {
            ContentParams::FeaturedRelations(featured) => featured,
            other => panic!("expected featured params, got {other:?}"),
        }
    }

    #[test]
    fn test_cells_with_overflow_marker() {
        let doc = featured_doc(json!({
            "featuredRelations": ["tag", "unknown", "done"],
            "tag": ["a", "b", "c"],
            "done": true
        }));
        let renderer = Renderer::new(&doc, &PageRelations, &NoAssets);
        let featured = unwrap_featured(renderer.render_block("fr").expect("present"));

        assert_eq!(featured.cells.len(), 2);

        let tag = &featured.cells[0];
        assert_eq!(tag.name, "Tag");
        assert_eq!(tag.value, Some(RelationValue::Items(vec!["a".to_owned()])));
        assert_eq!(tag.more.as_deref(), Some("+2"));
        assert!(!tag.last);

        let done = &featured.cells[1];
        assert_eq!(done.value, Some(RelationValue::Checkbox(true)));
        assert_eq!(done.more, None);
        assert!(done.last);
    }

    #[test]
    fn test_missing_value_renders_empty_cell() {
        let doc = featured_doc(json!({ "featuredRelations": ["done"] }));
        let renderer = Renderer::new(&doc, &PageRelations, &NoAssets);
        let featured = unwrap_featured(renderer.render_block("fr").expect("present"));

        assert_eq!(featured.cells.len(), 1);
        assert!(featured.cells[0].is_empty);
        assert!(featured.cells[0].last);
    }

    #[test]
    fn test_no_featured_relations_detail() {
        let doc = featured_doc(json!({}));
        let renderer = Renderer::new(&doc, &PageRelations, &NoAssets);
        let featured = unwrap_featured(renderer.render_block("fr").expect("present"));

        assert_eq!(featured, FeaturedRelationsParams::default());
    }
}
