//! Embed block builder.
//!
//! Inline processors (LaTeX, Mermaid, Graphviz) render their source
//! directly; web processors render as a sandboxed iframe. A processor
//! with no web rendering path produces the unsupported placeholder
//! rather than failing the render.

use blockpub_model::{EmbedContent, EmbedProcessor, Node};
use serde::Serialize;

use crate::params::{BlockParams, ContentParams};
use crate::renderer::Renderer;
use crate::resolver::{AssetResolver, RelationResolver};

/// Presentation parameters of an embed block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedParams {
    /// Processor class (`isYoutube`, `isMermaid`, ...).
    pub processor_class: &'static str,
    /// Embed source: URL, iframe markup or diagram code.
    pub content: String,
    /// Whether the template renders this inside a sandboxed iframe.
    pub is_iframe: bool,
    /// Iframe sandbox allowances.
    pub sandbox: Vec<&'static str>,
    /// Whether embedded script tags are allowed through (gist-style
    /// embeds that only work via their loader script).
    pub allow_script: bool,
}

impl<R: RelationResolver, A: AssetResolver> Renderer<'_, R, A> {
    pub(crate) fn embed_block(&self, node: &Node, embed: &EmbedContent) -> BlockParams {
        let Some(processor_class) = processor_class(embed.processor) else {
            let diagnostic = format!("unsupported embed processor: {:?}", embed.processor);
            tracing::warn!(id = %node.id, %diagnostic, "embed degraded to placeholder");
            return self.base_params(node, "blockEmbed", ContentParams::Unsupported { diagnostic });
        };

        let is_iframe = !matches!(
            embed.processor,
            EmbedProcessor::Latex | EmbedProcessor::Mermaid | EmbedProcessor::Graphviz
        );
        let mut sandbox = Vec::new();
        if is_iframe {
            sandbox = vec!["allow-scripts", "allow-same-origin", "allow-popups"];
            if matches!(embed.processor, EmbedProcessor::Youtube | EmbedProcessor::Vimeo) {
                sandbox.push("allow-presentation");
            }
        }
        let allow_script = matches!(
            embed.processor,
            EmbedProcessor::GithubGist | EmbedProcessor::Telegram
        );

        let content = ContentParams::Embed(EmbedParams {
            processor_class,
            content: embed.text.clone(),
            is_iframe,
            sandbox,
            allow_script,
        });
        let mut params = self.base_params(node, "blockEmbed", content);
        params.classes.push(processor_class.to_owned());
        params
    }
}

/// Processor class, or `None` when the processor has no rendering path.
fn processor_class(processor: EmbedProcessor) -> Option<&'static str> {
    match processor {
        EmbedProcessor::Latex => Some("isLatex"),
        EmbedProcessor::Mermaid => Some("isMermaid"),
        EmbedProcessor::Graphviz => Some("isGraphviz"),
        EmbedProcessor::Youtube => Some("isYoutube"),
        EmbedProcessor::Vimeo => Some("isVimeo"),
        EmbedProcessor::GoogleMaps => Some("isGoogleMaps"),
        EmbedProcessor::Miro => Some("isMiro"),
        EmbedProcessor::Figma => Some("isFigma"),
        EmbedProcessor::OpenStreetMap => Some("isOpenStreetMap"),
        EmbedProcessor::Telegram => Some("isTelegram"),
        EmbedProcessor::Codepen => Some("isCodepen"),
        EmbedProcessor::Bilibili => Some("isBilibili"),
        EmbedProcessor::Kroki => Some("isKroki"),
        EmbedProcessor::GithubGist => Some("isGithubGist"),
        EmbedProcessor::Sketchfab => Some("isSketchfab"),
        EmbedProcessor::Excalidraw => None,
    }
}
