//! Text block builder.
//!
//! The only builder that touches the interval tree: when a node carries
//! decoration marks, the tree is built from them and queried for the
//! full-text range to obtain the applicable marks in tree order. A node
//! with zero marks skips tree construction entirely — constructing the
//! tree from an empty mark list is a programmer error.

use blockpub_model::{Mark, MarkIntervalTree, MarkRange, Node, TextContent, TextStyle};
use serde::Serialize;

use crate::params::{BlockParams, ContentParams};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationResolver};

/// Presentation parameters of a text block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextParams {
    /// Display text. For title/description styles with no text of their
    /// own this is read through from the document details.
    pub text: String,
    /// Style class (`textParagraph`, `textHeader1`, ...).
    pub style_class: &'static str,
    /// Checkbox state, for checkbox-style nodes.
    pub checked: bool,
    /// Assigned ordinal, for numbered list items.
    pub ordinal: Option<u32>,
    /// Decoration marks applicable to the text, in tree order.
    pub marks: Vec<Mark>,
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn text_block(&self, node: &Node, text: &TextContent) -> BlockParams {
        let display = self.display_text(text);
        let marks = if text.marks.is_empty() {
            Vec::new()
        } else {
            let tree = MarkIntervalTree::build(&text.marks);
            let len = u32::try_from(display.chars().count()).unwrap_or(u32::MAX);
            tree.overlaps(MarkRange::new(0, len))
        };
        let ordinal = if text.style == TextStyle::Numbered {
            self.numbering().get(&node.id)
        } else {
            None
        };

        let style_class = text_style_class(text.style);
        let content = ContentParams::Text(TextParams {
            text: display,
            style_class,
            checked: text.checked,
            ordinal,
            marks,
        });
        let mut params = self.base_params(node, "blockText", content);
        params.classes.push(style_class.to_owned());
        params
    }

    /// Title and description blocks hold no text of their own in some
    /// documents; their content lives in the document details. Read it
    /// through at render time — the node itself stays untouched.
    fn display_text(&self, text: &TextContent) -> String {
        if text.text.is_empty() {
            let key = match text.style {
                TextStyle::Title => "name",
                TextStyle::Description => "description",
                _ => return String::new(),
            };
            return self.document().detail_str(key).unwrap_or_default().to_owned();
        }
        text.text.clone()
    }
}

fn text_style_class(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Paragraph => "textParagraph",
        TextStyle::Header1 => "textHeader1",
        TextStyle::Header2 => "textHeader2",
        TextStyle::Header3 => "textHeader3",
        TextStyle::Header4 => "textHeader4",
        TextStyle::Quote => "textQuote",
        TextStyle::Code => "textCode",
        TextStyle::Title => "textTitle",
        TextStyle::Description => "textDescription",
        TextStyle::Checkbox => "textCheckbox",
        TextStyle::Bulleted => "textBulleted",
        TextStyle::Numbered => "textNumbered",
        TextStyle::Toggle => "textToggle",
        TextStyle::Callout => "textCallout",
    }
}
