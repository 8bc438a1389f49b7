//! Core types for taxsearch-core.
//!
//! This module defines the data shared by every component: the host-owned
//! [`Term`] records, the [`FilterExpression`] the query filter builder
//! produces, and the asset records the asset conditioner hands to the host
//! pipeline.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Taxonomy terms
// ---------------------------------------------------------------------------

/// Host identifier of a single term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(pub u64);

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A term as returned by the host taxonomy store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    /// Display name, shown as the dropdown option label.
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Number of content items tagged with this term.
    #[serde(default)]
    pub count: u64,
}

/// Options passed to [`TermProvider::list_terms`](crate::host::TermProvider::list_terms).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermQuery {
    /// Leave out terms with no associated content.
    pub hide_empty: bool,
}

impl TermQuery {
    /// Every term of the taxonomy, including ones with no content.
    pub const INCLUDE_EMPTY: TermQuery = TermQuery { hide_empty: false };
}

// ---------------------------------------------------------------------------
// Filter expression
// ---------------------------------------------------------------------------

/// Logical combinator applied across taxonomy clauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "AND")]
    And,
    #[default]
    #[serde(rename = "OR")]
    Or,
}

impl Relation {
    /// Parse a stored relation value. Case-insensitive, surrounding
    /// whitespace ignored. Returns `None` for anything but `AND`/`OR`.
    pub fn parse(raw: &str) -> Option<Relation> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AND" => Some(Relation::And),
            "OR" => Some(Relation::Or),
            _ => None,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::And => write!(f, "AND"),
            Relation::Or => write!(f, "OR"),
        }
    }
}

/// Which term attribute a clause matches on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchField {
    #[default]
    #[serde(rename = "term_id")]
    TermId,
}

/// A term reference inside a clause.
///
/// Terms resolved from the provider are [`TermRef::Id`]; a value taken from
/// the request is passed through untouched as [`TermRef::Raw`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermRef {
    Id(TermId),
    Raw(String),
}

impl From<TermId> for TermRef {
    fn from(id: TermId) -> Self {
        TermRef::Id(id)
    }
}

impl From<&str> for TermRef {
    fn from(raw: &str) -> Self {
        TermRef::Raw(raw.to_string())
    }
}

/// "Documents whose `taxonomy` has a term in `terms`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxClause {
    pub taxonomy: String,
    pub field: MatchField,
    pub terms: Vec<TermRef>,
}

/// The taxonomy filter installed onto a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExpression {
    pub relation: Relation,
    pub clauses: Vec<TaxClause>,
}

impl FilterExpression {
    /// Taxonomy keys covered by this filter, in clause order.
    pub fn taxonomies(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(|c| c.taxonomy.as_str())
    }
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// One of the optional presentation assets.
///
/// Ordering is the order the host should attach them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetRef {
    BaseStyle,
    Select2Style,
    Select2Script,
    BaseScript,
}

impl AssetRef {
    pub fn is_style(self) -> bool {
        matches!(self, AssetRef::BaseStyle | AssetRef::Select2Style)
    }

    pub fn is_script(self) -> bool {
        !self.is_style()
    }
}

/// A stylesheet registration for the host asset pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAsset {
    pub handle: String,
    pub src: String,
    pub deps: Vec<String>,
    pub version: String,
    pub media: String,
}

/// A script registration for the host asset pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptAsset {
    pub handle: String,
    pub src: String,
    pub deps: Vec<String>,
    pub version: String,
    /// Load before `</body>` instead of in `<head>`.
    pub in_footer: bool,
}
