//! Request parameters and the in-flight search query.

use taxsearch_core::host::{RequestParams, SearchQuery};
use taxsearch_core::FilterExpression;

/// Name of the free-text search parameter.
pub const SEARCH_PARAM: &str = "s";

/// Decoded query-string parameters, in request order.
///
/// A repeated name resolves to its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode an `application/x-www-form-urlencoded` query string. A leading
    /// `?` is ignored.
    ///
    /// Array-style names (`name[]`, `name[k]`) are folded onto `name`, so
    /// `select-color[]=2` reads as `select-color=2`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (base_name(&k).to_string(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn base_name(name: &str) -> &str {
    match name.find('[') {
        Some(open) if open > 0 && name.ends_with(']') => &name[..open],
        _ => name,
    }
}

impl RequestParams for QueryParams {
    fn param(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A front-end query. It is a search when the `s` parameter is present,
/// even if empty, so a form with a hidden text field still filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    search: Option<String>,
    taxonomy_filter: Option<FilterExpression>,
}

impl SearchRequest {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            search: params.param(SEARCH_PARAM).map(str::to_string),
            taxonomy_filter: None,
        }
    }

    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn taxonomy_filter(&self) -> Option<&FilterExpression> {
        self.taxonomy_filter.as_ref()
    }
}

impl SearchQuery for SearchRequest {
    fn is_search(&self) -> bool {
        self.search.is_some()
    }

    fn set_taxonomy_filter(&mut self, filter: FilterExpression) {
        self.taxonomy_filter = Some(filter);
    }
}
