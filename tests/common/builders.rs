//! Test builders: ergonomic constructors for settings blobs, terms, and sites.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::{json, Map, Value};
use taxsearch::Site;
use taxsearch_core::{SearchAddon, Settings, Term, TermId};
use taxsearch_host::catalog::TaxonomyEntry;
use taxsearch_host::{HtmlMarkup, MemorySettingsStore, TaxonomyCatalog};

pub const PLUGIN: &str = "advanced-search";
pub const HOME: &str = "https://shop.test";

// ---------------------------------------------------------------------------
// SettingsBlob
// ---------------------------------------------------------------------------

/// Fluent builder for the raw option blob the host stores.
///
/// # Example
///
/// ```rust
/// let blob = SettingsBlob::new()
///     .taxonomies(&["color", "size"])
///     .relation("AND")
///     .flag("toggle-css", "1")
///     .build();
/// ```
#[derive(Default)]
pub struct SettingsBlob {
    fields: Map<String, Value>,
}

impl SettingsBlob {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn taxonomies(mut self, keys: &[&str]) -> Self {
        self.fields.insert("taxonomy".into(), json!(keys));
        self
    }

    pub fn relation(mut self, relation: &str) -> Self {
        self.fields.insert("toggle-relation".into(), json!(relation));
        self
    }

    pub fn flag(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }

    pub fn settings(self) -> Settings {
        Settings::from_value(&self.build())
    }

    /// A settings store holding this blob under the test plugin's key.
    pub fn store(self) -> MemorySettingsStore {
        MemorySettingsStore::new().with(Settings::option_key(PLUGIN), self.build())
    }
}

// ---------------------------------------------------------------------------
// Terms and catalogs
// ---------------------------------------------------------------------------

pub fn term(id: u64, name: &str) -> Term {
    Term {
        id: TermId(id),
        name: name.to_string(),
        slug: name.to_ascii_lowercase(),
        count: 0,
    }
}

pub fn taxonomy(key: &str, label: &str, terms: Vec<Term>) -> TaxonomyEntry {
    TaxonomyEntry {
        key: key.to_string(),
        label: Some(label.to_string()),
        terms,
    }
}

/// `color` with Red/Blue, and `size` with no terms.
pub fn color_size_catalog() -> TaxonomyCatalog {
    TaxonomyCatalog::new(vec![
        taxonomy("color", "Colors", vec![term(1, "Red"), term(2, "Blue")]),
        taxonomy("size", "Sizes", vec![]),
    ])
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

pub fn addon() -> SearchAddon {
    SearchAddon::new(PLUGIN, "1.0.0", "/assets")
}

pub fn markup() -> HtmlMarkup {
    HtmlMarkup::new(HOME)
}

/// An in-memory site over `blob` and `catalog`.
pub fn site(blob: SettingsBlob, catalog: TaxonomyCatalog) -> Site {
    Site::new(addon(), blob.store(), catalog, markup())
}
