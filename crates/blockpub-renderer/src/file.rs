//! File and media block builder.

use blockpub_model::{FileContent, FileKind, Node};
use serde::Serialize;

use crate::params::{BlockParams, ContentParams};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationResolver};

/// Presentation parameters of a file or media block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileParams {
    /// Resolved source URL, empty when resolution failed.
    pub src: String,
    pub name: String,
    /// Human-readable size, e.g. `"2.5MB"`.
    pub size_label: String,
    pub kind: FileKind,
    /// Declared display width as a percent string, when set.
    pub width: Option<String>,
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn file_block(&self, node: &Node, file: &FileContent) -> BlockParams {
        let src = match self.assets().file_url(&file.target_object_id) {
            Ok(src) => src,
            Err(err) => {
                tracing::warn!(
                    id = %node.id,
                    target = %file.target_object_id,
                    error = %err,
                    "failed to resolve file url"
                );
                String::new()
            }
        };
        let content = ContentParams::File(FileParams {
            src,
            name: file.name.clone(),
            size_label: pretty_byte_size(file.size),
            kind: file.kind,
            width: width_percent(node),
        });
        let mut params = self.base_params(node, "blockFile", content);
        params.classes.push(file_kind_class(file.kind).to_owned());
        params
    }
}

fn file_kind_class(kind: FileKind) -> &'static str {
    match kind {
        FileKind::File => "isFile",
        FileKind::Image => "isImage",
        FileKind::Video => "isVideo",
        FileKind::Audio => "isAudio",
        FileKind::Pdf => "isPdf",
    }
}

/// Declared width fraction as a percent string, e.g. `0.6` -> `"60%"`.
fn width_percent(node: &Node) -> Option<String> {
    let width = node.field_f64("width")?;
    let percent = (width * 100.0) as i64;
    if percent == 0 {
        return None;
    }
    Some(format!("{percent}%"))
}

/// Human-readable byte size with binary units.
fn pretty_byte_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in ["", "K", "M", "G", "T", "P", "E", "Z"] {
        if value < 1024.0 {
            return format!("{value:.1}{unit}B");
        }
        value /= 1024.0;
    }
    format!("{value:.1}YiB")
}

#[cfg(test)]
mod tests {
    use blockpub_model::{Content, Document};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::error::AssetError;
    use crate::resolver::{AssetResolver, NoAssets, NoRelations};

    use super::*;

    struct FileAssets;

    impl AssetResolver for FileAssets {
        fn file_url(&self, id: &str) -> Result<String, AssetError> {
            Ok(format!("/files/{id}"))
        }

        fn object_link(&self, id: &str) -> Result<String, AssetError> {
            Err(AssetError::NotFound { id: id.to_owned() })
        }

        fn emoji_url(&self, _emoji: char) -> String {
            String::new()
        }
    }

    fn image_node() -> Node {
        Node::new(
            "f1",
            Content::File(FileContent {
                target_object_id: "img42".to_owned(),
                name: "photo.png".to_owned(),
                size: 2_621_440,
                kind: FileKind::Image,
            }),
        )
        .with_field("width", json!(0.6))
    }

    #[test]
    fn test_image_params() {
        let doc = Document::build(vec![image_node()], "f1");
        let renderer = Renderer::new(&doc, &NoRelations, &FileAssets);
        let params = renderer.render_block("f1").expect("present");

        assert!(params.classes.contains(&"isImage".to_owned()));
        assert_eq!(
            params.content,
            ContentParams::File(FileParams {
                src: "/files/img42".to_owned(),
                name: "photo.png".to_owned(),
                size_label: "2.5MB".to_owned(),
                kind: FileKind::Image,
                width: Some("60%".to_owned()),
            })
        );
    }

    #[test]
    fn test_unresolvable_file_degrades_to_empty_src() {
        let doc = Document::build(vec![image_node()], "f1");
        let renderer = Renderer::new(&doc, &NoRelations, &NoAssets);
        let params = renderer.render_block("f1").expect("present");

        let ContentParams::File(file) = params.content else {
            panic!("expected file params");
        };
        assert_eq!(file.src, "");
        assert_eq!(file.name, "photo.png");
    }

    #[test]
    fn test_pretty_byte_size_units() {
        assert_eq!(pretty_byte_size(0), "0.0B");
        assert_eq!(pretty_byte_size(512), "512.0B");
        assert_eq!(pretty_byte_size(2048), "2.0KB");
        assert_eq!(pretty_byte_size(5 * 1024 * 1024), "5.0MB");
    }

    #[test]
    fn test_width_percent_absent_when_zero() {
        let node = Node::new("f", Content::Table).with_field("width", json!(0.0));
        assert_eq!(width_percent(&node), None);
        let node = Node::new("f", Content::Table);
        assert_eq!(width_percent(&node), None);
    }
}
