//! Domain-specific assertion macros for taxsearch harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! taxonomy clause was wrong, instead of dumping two whole filters.

/// Assert that a filter has a clause for `taxonomy` with exactly `terms`.
///
/// ```rust
/// assert_clause!(filter, "color", [TermRef::Id(TermId(7))]);
/// ```
#[macro_export]
macro_rules! assert_clause {
    ($filter:expr, $taxonomy:expr, [$($term:expr),* $(,)?]) => {{
        let filter: &taxsearch_core::FilterExpression = &$filter;
        let taxonomy: &str = $taxonomy;
        let expected: Vec<taxsearch_core::TermRef> = vec![$($term.into()),*];
        match filter.clauses.iter().find(|c| c.taxonomy == taxonomy) {
            Some(clause) => pretty_assertions::assert_eq!(
                clause.terms, expected,
                "assert_clause! failed: wrong terms for taxonomy {:?}", taxonomy
            ),
            None => panic!(
                "assert_clause! failed: no clause for {:?}.\n  Clauses: {:?}",
                taxonomy,
                filter.taxonomies().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a filter has no clause for `taxonomy`.
#[macro_export]
macro_rules! assert_no_clause {
    ($filter:expr, $taxonomy:expr) => {{
        let filter: &taxsearch_core::FilterExpression = &$filter;
        let taxonomy: &str = $taxonomy;
        if filter.clauses.iter().any(|c| c.taxonomy == taxonomy) {
            panic!(
                "assert_no_clause! failed: unexpected clause for {:?}.\n  Clauses: {:?}",
                taxonomy,
                filter.taxonomies().collect::<Vec<_>>()
            );
        }
    }};
}

/// Extract the `value` attributes of every `<option>` inside the dropdown
/// named `name`, in document order. `None` when there is no such dropdown.
pub fn option_values(html: &str, name: &str) -> Option<Vec<String>> {
    let open = format!(r#"<select id="{name}" name="{name}">"#);
    let start = html.find(&open)? + open.len();
    let end = start + html[start..].find("</select>")?;
    let values = html[start..end]
        .split("<option value=\"")
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .map(str::to_string)
        .collect();
    Some(values)
}
