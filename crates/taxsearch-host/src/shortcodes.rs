//! Shortcode table: a [`Shortcodes`] implementation that expands tags in
//! page content.
//!
//! Only self-closing tags are recognized: `[tag]`, `[tag /]`, and
//! `[tag attr="…"]`. Attributes are ignored. Unregistered tags and stray
//! brackets are left as written.

use taxsearch_core::host::{ShortcodeHandler, Shortcodes};

#[derive(Default)]
pub struct ShortcodeRegistry<'a> {
    handlers: Vec<(String, ShortcodeHandler<'a>)>,
}

impl<'a> ShortcodeRegistry<'a> {
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.handlers.iter().any(|(t, _)| t == tag)
    }

    /// Replace every registered tag in `content` with its handler's output.
    pub fn expand(&self, content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut rest = content;
        while let Some(open) = rest.find('[') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let expanded = tail
                .find(']')
                .and_then(|close| self.render(&tail[1..close]).map(|html| (close, html)));
            match expanded {
                Some((close, html)) => {
                    out.push_str(&html);
                    rest = &tail[close + 1..];
                }
                None => {
                    out.push('[');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn render(&self, inner: &str) -> Option<String> {
        if inner.starts_with(char::is_whitespace) {
            return None;
        }
        let tag = inner.split_whitespace().next()?.trim_end_matches('/');
        let (_, handler) = self.handlers.iter().find(|(t, _)| t == tag)?;
        tracing::trace!(tag, "expanding shortcode");
        Some(handler())
    }
}

impl<'a> Shortcodes<'a> for ShortcodeRegistry<'a> {
    fn register(&mut self, tag: &str, handler: ShortcodeHandler<'a>) {
        self.handlers.retain(|(t, _)| t != tag);
        self.handlers.push((tag.to_string(), handler));
    }
}
