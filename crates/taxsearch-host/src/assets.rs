//! Asset registry: an [`AssetPipeline`] that renders tags.
//!
//! Registrations are idempotent per handle: enqueueing the same handle twice
//! keeps the first registration, as a host pipeline would.

use taxsearch_core::host::AssetPipeline;
use taxsearch_core::{ScriptAsset, StyleAsset};

use crate::markup::html_escape;

#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    styles: Vec<StyleAsset>,
    scripts: Vec<ScriptAsset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles(&self) -> &[StyleAsset] {
        &self.styles
    }

    pub fn scripts(&self) -> &[ScriptAsset] {
        &self.scripts
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.scripts.is_empty()
    }

    /// Tags for `<head>`: every stylesheet, then scripts not deferred to the footer.
    pub fn head_html(&self) -> String {
        let styles = self.styles.iter().map(style_tag);
        let scripts = self.scripts.iter().filter(|s| !s.in_footer).map(script_tag);
        styles.chain(scripts).collect::<Vec<_>>().join("\n")
    }

    /// Tags for the end of `<body>`.
    pub fn footer_html(&self) -> String {
        self.scripts
            .iter()
            .filter(|s| s.in_footer)
            .map(script_tag)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl AssetPipeline for AssetRegistry {
    fn enqueue_style(&mut self, style: StyleAsset) {
        if self.styles.iter().any(|s| s.handle == style.handle) {
            tracing::trace!(handle = %style.handle, "style already enqueued");
            return;
        }
        self.styles.push(style);
    }

    fn enqueue_script(&mut self, script: ScriptAsset) {
        if self.scripts.iter().any(|s| s.handle == script.handle) {
            tracing::trace!(handle = %script.handle, "script already enqueued");
            return;
        }
        self.scripts.push(script);
    }
}

fn versioned(src: &str, version: &str) -> String {
    if version.is_empty() {
        return src.to_string();
    }
    let sep = if src.contains('?') { '&' } else { '?' };
    format!("{src}{sep}ver={version}")
}

fn style_tag(style: &StyleAsset) -> String {
    format!(
        r#"<link rel="stylesheet" id="{}-css" href="{}" media="{}" />"#,
        html_escape(&style.handle),
        html_escape(&versioned(&style.src, &style.version)),
        html_escape(&style.media),
    )
}

fn script_tag(script: &ScriptAsset) -> String {
    format!(
        r#"<script src="{}" id="{}-js"></script>"#,
        html_escape(&versioned(&script.src, &script.version)),
        html_escape(&script.handle),
    )
}
