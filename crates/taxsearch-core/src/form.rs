//! Search form renderer.
//!
//! Produces the markup the shortcode expands to: a GET form aimed at the
//! site root with a free-text `s` field, one dropdown per configured
//! taxonomy, and a submit button. All dynamic text goes through the host's
//! [`Markup`] escaping and string lookup.

use crate::host::{Markup, TermProvider};
use crate::settings::Settings;
use crate::types::TermQuery;

/// Sentinel option value meaning "every term of this taxonomy".
pub const ALL_TERMS: &str = "all";

const FORM_CLASS: &str = "search-form advanced-search-form advanced-search-shortcode";
const HIDDEN_INPUT_CLASS: &str = "search-field-hide";

/// Request parameter carrying the selection for `taxonomy`.
pub fn select_param(taxonomy: &str) -> String {
    format!("select-{taxonomy}")
}

/// Render the search form.
///
/// A taxonomy whose terms cannot be listed, or that has none, gets no
/// dropdown. The rest of the form still renders.
pub fn render_form(settings: &Settings, terms: &dyn TermProvider, markup: &dyn Markup) -> String {
    let mut form = format!(
        r#"<form role="search" class="{FORM_CLASS}" method="get" action="{}">"#,
        markup.esc_attr(&markup.home_url("/"))
    );

    let input_class = if settings.hide_search_input {
        format!("search-field {HIDDEN_INPUT_CLASS}")
    } else {
        "search-field".to_string()
    };
    form.push_str(&format!(
        r#"<input type="search" class="{}" placeholder="{}" name="s" />"#,
        markup.esc_attr(&input_class),
        markup.esc_attr(&markup.translate("Search...", "placeholder")),
    ));

    for taxonomy in &settings.taxonomies {
        if let Some(select) = render_select(taxonomy, terms, markup) {
            form.push_str(&select);
        }
    }

    form.push_str(&format!(
        r#"<input type="submit" class="search-submit-input" value="{}" />"#,
        markup.esc_attr(&markup.translate("Submit", "submit button")),
    ));
    form.push_str("</form>");
    form
}

fn render_select(taxonomy: &str, provider: &dyn TermProvider, markup: &dyn Markup) -> Option<String> {
    let terms = match provider.list_terms(taxonomy, TermQuery::INCLUDE_EMPTY) {
        Ok(terms) if !terms.is_empty() => terms,
        Ok(_) => {
            tracing::debug!(taxonomy, "no terms, skipping dropdown");
            return None;
        }
        Err(err) => {
            tracing::debug!(taxonomy, error = %err, "term lookup failed, skipping dropdown");
            return None;
        }
    };

    let label = provider
        .taxonomy_label(taxonomy)
        .unwrap_or_else(|| taxonomy.to_string());
    let name = markup.esc_attr(&select_param(taxonomy));

    let mut html = String::from(r#"<div class="advanced-search-inline-select">"#);
    html.push_str(&format!(r#"<select id="{name}" name="{name}">"#));
    html.push_str(&format!(
        r#"<option value="{ALL_TERMS}">{}</option>"#,
        markup.esc_html(&label)
    ));
    for term in &terms {
        html.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            markup.esc_attr(&term.id.to_string()),
            markup.esc_html(&term.name),
        ));
    }
    html.push_str("</select></div>");
    Some(html)
}
