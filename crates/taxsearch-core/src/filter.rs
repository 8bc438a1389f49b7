//! Query filter builder.
//!
//! Translates the `select-<taxonomy>` parameters of a search request into a
//! [`FilterExpression`]. A selection of `all` expands to every term of the
//! taxonomy, empty ones included; any other value is passed through as a
//! single term reference without validation.

use crate::error::FilterError;
use crate::form::{select_param, ALL_TERMS};
use crate::host::{RequestParams, TermProvider};
use crate::settings::Settings;
use crate::types::{FilterExpression, MatchField, TaxClause, TermQuery, TermRef};

/// Build the taxonomy filter for a request.
///
/// Returns `Ok(None)` when no taxonomies are configured, when the request is
/// not a search, or when no taxonomy has a selection. An empty clause list is
/// never returned: query engines disagree on whether it matches everything or
/// nothing, and an unfiltered search is what the user asked for.
pub fn build_filter(
    settings: &Settings,
    params: &dyn RequestParams,
    is_search: bool,
    terms: &dyn TermProvider,
) -> Result<Option<FilterExpression>, FilterError> {
    if !settings.has_taxonomies() || !is_search {
        return Ok(None);
    }

    let mut clauses = Vec::new();
    for taxonomy in &settings.taxonomies {
        let Some(selected) = params.param(&select_param(taxonomy)) else {
            continue;
        };

        let refs: Vec<TermRef> = if selected == ALL_TERMS {
            terms
                .list_terms(taxonomy, TermQuery::INCLUDE_EMPTY)
                .map_err(|source| FilterError::TermLookup {
                    taxonomy: taxonomy.clone(),
                    source,
                })?
                .into_iter()
                .map(|term| TermRef::Id(term.id))
                .collect()
        } else {
            vec![TermRef::Raw(selected.to_string())]
        };

        tracing::trace!(taxonomy = %taxonomy, terms = refs.len(), "taxonomy clause");
        clauses.push(TaxClause {
            taxonomy: taxonomy.clone(),
            field: MatchField::TermId,
            terms: refs,
        });
    }

    if clauses.is_empty() {
        return Ok(None);
    }

    Ok(Some(FilterExpression {
        relation: settings.relation,
        clauses,
    }))
}
