//! Error types shared by the core components and their host collaborators.

use thiserror::Error;

/// Failure reported by a [`TermProvider`](crate::host::TermProvider).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown taxonomy {0:?}")]
    UnknownTaxonomy(String),
    #[error("term lookup for {taxonomy:?} failed: {reason}")]
    Lookup { taxonomy: String, reason: String },
}

/// Failure while building a taxonomy filter.
///
/// Filter construction only fails when the provider cannot enumerate the
/// terms behind an `all` selection. An empty term list would silently turn
/// the filter into something else, so the error is surfaced instead.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("could not resolve terms of taxonomy {taxonomy:?}")]
    TermLookup {
        taxonomy: String,
        #[source]
        source: ProviderError,
    },
}
