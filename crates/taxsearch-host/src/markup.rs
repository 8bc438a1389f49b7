//! HTML markup helpers: escaping, a small string table, and site URLs.

use std::collections::HashMap;

use taxsearch_core::config::StringOverride;
use taxsearch_core::host::Markup;

/// HTML-escape a string for element content or a quoted attribute.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[derive(Debug, Clone)]
pub struct HtmlMarkup {
    home_url: String,
    /// `(context, text)` → translation
    strings: HashMap<(String, String), String>,
}

impl HtmlMarkup {
    pub fn new(home_url: impl Into<String>) -> Self {
        Self {
            home_url: home_url.into(),
            strings: HashMap::new(),
        }
    }

    pub fn with_translation(
        mut self,
        context: impl Into<String>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.strings
            .insert((context.into(), text.into()), translation.into());
        self
    }

    pub fn with_strings<'a>(self, overrides: impl IntoIterator<Item = &'a StringOverride>) -> Self {
        overrides.into_iter().fold(self, |markup, s| {
            markup.with_translation(&s.context, &s.text, &s.translation)
        })
    }
}

impl Markup for HtmlMarkup {
    fn home_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.home_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn esc_attr(&self, text: &str) -> String {
        html_escape(text)
    }

    fn esc_html(&self, text: &str) -> String {
        html_escape(text)
    }

    fn translate(&self, text: &str, context: &str) -> String {
        self.strings
            .get(&(context.to_string(), text.to_string()))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
