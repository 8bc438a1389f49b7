//! Host collaborators.
//!
//! Everything the add-on needs from the surrounding platform is reached
//! through these traits: the settings store, the asset pipeline, taxonomy
//! lookups, the current request, the in-flight search query, shortcode
//! registration, and markup helpers. Each entry point in [`SearchAddon`](crate::SearchAddon) takes the
//! collaborators it uses as parameters, so every component can be exercised
//! without a running host.

use std::collections::{BTreeMap, HashMap};

use crate::error::ProviderError;
use crate::types::{FilterExpression, ScriptAsset, StyleAsset, Term, TermQuery};

/// Read access to the host's persisted option blobs.
pub trait SettingsStore {
    /// The blob stored under `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Option<serde_json::Value>;
}

/// The host's style/script registration pipeline. Calls are fire-and-forget.
pub trait AssetPipeline {
    fn enqueue_style(&mut self, style: StyleAsset);
    fn enqueue_script(&mut self, script: ScriptAsset);
}

/// Taxonomy and term lookups.
pub trait TermProvider {
    /// Terms of `taxonomy` in host order.
    fn list_terms(&self, taxonomy: &str, query: TermQuery) -> Result<Vec<Term>, ProviderError>;

    /// Plural display label of `taxonomy`, if the host knows one.
    fn taxonomy_label(&self, taxonomy: &str) -> Option<String>;
}

/// Read-only query-string parameters of the current request.
pub trait RequestParams {
    fn param(&self, name: &str) -> Option<&str>;
}

impl RequestParams for HashMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RequestParams for BTreeMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// The host's in-flight search query, handed to the pre-search hook.
pub trait SearchQuery {
    /// Whether the host classifies this request as a search.
    fn is_search(&self) -> bool;

    /// Install `filter` as the query's taxonomy filter, replacing whatever
    /// taxonomy handling the query would otherwise apply.
    fn set_taxonomy_filter(&mut self, filter: FilterExpression);
}

/// Callback producing the markup a shortcode expands to.
pub type ShortcodeHandler<'a> = Box<dyn Fn() -> String + 'a>;

/// The host's shortcode table. Content containing `[tag]` has the tag
/// replaced by the registered handler's output.
pub trait Shortcodes<'a> {
    /// Register `handler` under `tag`, replacing any earlier registration.
    fn register(&mut self, tag: &str, handler: ShortcodeHandler<'a>);
}

/// Markup helpers: URLs, escaping, and string lookup.
pub trait Markup {
    /// Absolute URL of `path` on the site front end.
    fn home_url(&self, path: &str) -> String;

    /// Escape `text` for use inside a double-quoted attribute.
    fn esc_attr(&self, text: &str) -> String;

    /// Escape `text` for use as element content.
    fn esc_html(&self, text: &str) -> String;

    /// Localized form of `text`, disambiguated by `context`.
    fn translate(&self, text: &str, context: &str) -> String;
}
