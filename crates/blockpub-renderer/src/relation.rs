//! Relation block builder.
//!
//! A relation block references a document property by key. The key is
//! resolved through the [`RelationResolver`] collaborator; the value
//! comes from the document-level details map. An unknown key renders as
//! a deleted relation, a known key without a value as an empty one.

use blockpub_model::{Node, RelationContent, UNTITLED};
use serde::Serialize;
use serde_json::Value;

use crate::params::{BlockParams, ContentParams};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationFormat, RelationResolver};

/// Presentation parameters of a relation block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelationParams {
    pub name: String,
    /// Format class (`c-longText`, `c-select`, ...).
    pub format_class: &'static str,
    /// The relation key is unknown to the resolver.
    pub is_deleted: bool,
    /// No value to display.
    pub is_empty: bool,
    pub value: Option<RelationValue>,
}

/// Typed relation value extracted from the details map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum RelationValue {
    Text(String),
    Number(f64),
    /// Unix timestamp in seconds; date formatting is a template concern.
    Timestamp(i64),
    Checkbox(bool),
    /// Item ids or option labels for list-valued formats.
    Items(Vec<String>),
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn relation_block(&self, node: &Node, relation: &RelationContent) -> BlockParams {
        let content = match self.relations().relation_info(&relation.key) {
            None => {
                tracing::warn!(id = %node.id, key = %relation.key, "unknown relation key");
                RelationParams {
                    name: UNTITLED.to_owned(),
                    format_class: RelationFormat::default().class(),
                    is_deleted: true,
                    is_empty: true,
                    value: None,
                }
            }
            Some(info) => {
                let name = if info.name.is_empty() {
                    UNTITLED.to_owned()
                } else {
                    info.name
                };
                let value = self
                    .document()
                    .details()
                    .get(&relation.key)
                    .and_then(|raw| relation_value(info.format, raw));
                RelationParams {
                    name,
                    format_class: info.format.class(),
                    is_deleted: false,
                    is_empty: value.is_none(),
                    value,
                }
            }
        };
        self.base_params(node, "blockRelation", ContentParams::Relation(content))
    }
}

/// Extract a typed value from a raw details entry, or `None` when the
/// entry does not fit the declared format.
pub(crate) fn relation_value(format: RelationFormat, raw: &Value) -> Option<RelationValue> {
    match format {
        RelationFormat::LongText
        | RelationFormat::ShortText
        | RelationFormat::Url
        | RelationFormat::Email
        | RelationFormat::Phone => raw
            .as_str()
            .filter(|text| !text.is_empty())
            .map(|text| RelationValue::Text(text.to_owned())),
        RelationFormat::Number => raw.as_f64().map(RelationValue::Number),
        RelationFormat::Date => raw
            .as_i64()
            .filter(|&seconds| seconds != 0)
            .map(RelationValue::Timestamp),
        RelationFormat::Checkbox => raw.as_bool().map(RelationValue::Checkbox),
        RelationFormat::Status | RelationFormat::Tag | RelationFormat::File | RelationFormat::Object => {
            let items: Vec<String> = match raw {
                Value::Array(values) => values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect(),
                Value::String(single) if !single.is_empty() => vec![single.clone()],
                _ => Vec::new(),
            };
            if items.is_empty() {
                None
            } else {
                Some(RelationValue::Items(items))
            }
        }
    }
}
