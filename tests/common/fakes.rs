//! Fake collaborators for failure paths the real adapters cannot produce on
//! demand.

use std::cell::Cell;

use taxsearch_core::host::TermProvider;
use taxsearch_core::{ProviderError, Term, TermQuery};
use taxsearch_host::TaxonomyCatalog;

/// Wraps a catalog and fails every lookup of one taxonomy.
pub struct FailingProvider {
    pub inner: TaxonomyCatalog,
    pub broken: &'static str,
}

impl TermProvider for FailingProvider {
    fn list_terms(&self, taxonomy: &str, query: TermQuery) -> Result<Vec<Term>, ProviderError> {
        if taxonomy == self.broken {
            return Err(ProviderError::Lookup {
                taxonomy: taxonomy.to_string(),
                reason: "term store unavailable".to_string(),
            });
        }
        self.inner.list_terms(taxonomy, query)
    }

    fn taxonomy_label(&self, taxonomy: &str) -> Option<String> {
        self.inner.taxonomy_label(taxonomy)
    }
}

/// Counts lookups so tests can assert the provider was (not) consulted.
pub struct CountingProvider {
    pub inner: TaxonomyCatalog,
    pub calls: Cell<usize>,
}

impl CountingProvider {
    pub fn new(inner: TaxonomyCatalog) -> Self {
        Self { inner, calls: Cell::new(0) }
    }
}

impl TermProvider for CountingProvider {
    fn list_terms(&self, taxonomy: &str, query: TermQuery) -> Result<Vec<Term>, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.list_terms(taxonomy, query)
    }

    fn taxonomy_label(&self, taxonomy: &str) -> Option<String> {
        self.inner.taxonomy_label(taxonomy)
    }
}
