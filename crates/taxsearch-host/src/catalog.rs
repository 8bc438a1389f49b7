//! Taxonomy catalog: a file-backed [`TermProvider`].
//!
//! Catalogs are TOML (or JSON/YAML, picked by file extension):
//!
//! ```toml
//! [[taxonomies]]
//! key   = "color"
//! label = "Colors"
//! terms = [
//!     { id = 1, name = "Red", slug = "red", count = 4 },
//!     { id = 2, name = "Blue" },
//! ]
//! ```
//!
//! Terms keep file order.

use std::path::Path;

use config::{Config, File};
pub use config::FileFormat;
use serde::Deserialize;
use taxsearch_core::host::TermProvider;
use taxsearch_core::{ProviderError, Term, TermQuery};

use crate::error::HostError;

#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    taxonomies: Vec<TaxonomyEntry>,
}

/// One taxonomy and its terms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxonomyEntry {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub terms: Vec<Term>,
}

#[derive(Debug, Clone, Default)]
pub struct TaxonomyCatalog {
    taxonomies: Vec<TaxonomyEntry>,
}

impl TaxonomyCatalog {
    pub fn new(taxonomies: Vec<TaxonomyEntry>) -> Self {
        Self { taxonomies }
    }

    /// Load a catalog file; the format follows the extension.
    pub fn load(path: &Path) -> Result<Self, HostError> {
        let raw: RawCatalog = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        tracing::debug!(path = %path.display(), taxonomies = raw.taxonomies.len(), "catalog loaded");
        Ok(Self::new(raw.taxonomies))
    }

    /// Parse catalog source text.
    pub fn parse(src: &str, format: FileFormat) -> Result<Self, HostError> {
        let raw: RawCatalog = Config::builder()
            .add_source(File::from_str(src, format))
            .build()?
            .try_deserialize()?;
        Ok(Self::new(raw.taxonomies))
    }

    /// Add or replace a taxonomy.
    pub fn insert(&mut self, entry: TaxonomyEntry) {
        match self.taxonomies.iter_mut().find(|t| t.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.taxonomies.push(entry),
        }
    }

    pub fn taxonomy(&self, key: &str) -> Option<&TaxonomyEntry> {
        self.taxonomies.iter().find(|t| t.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.taxonomies.iter().map(|t| t.key.as_str())
    }
}

impl TermProvider for TaxonomyCatalog {
    fn list_terms(&self, taxonomy: &str, query: TermQuery) -> Result<Vec<Term>, ProviderError> {
        let entry = self
            .taxonomy(taxonomy)
            .ok_or_else(|| ProviderError::UnknownTaxonomy(taxonomy.to_string()))?;
        Ok(entry
            .terms
            .iter()
            .filter(|term| !query.hide_empty || term.count > 0)
            .cloned()
            .collect())
    }

    fn taxonomy_label(&self, taxonomy: &str) -> Option<String> {
        self.taxonomy(taxonomy).and_then(|t| t.label.clone())
    }
}
