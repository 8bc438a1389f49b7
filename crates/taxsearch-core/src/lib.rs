//! taxsearch-core: taxonomy filters for site search.
//!
//! This crate holds the settings snapshot, the shared types, and the three
//! components that consume it, plus the collaborator traits the host
//! implements.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──► Asset conditioner ──► AssetPipeline
//! SettingsStore ──►├──► Form renderer ──────► markup (shortcode)
//!                  └──► Filter builder ─────► SearchQuery
//! ```
//!
//! Nothing is cached between requests: every hook reads the settings store
//! again and builds its output from scratch.

pub mod addon;
pub mod assets;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod host;
pub mod settings;
pub mod types;

pub use addon::{SearchAddon, SHORTCODE_TAG};
pub use error::{FilterError, ProviderError};
pub use settings::Settings;
pub use types::{
    AssetRef, FilterExpression, MatchField, Relation, ScriptAsset, StyleAsset, TaxClause, Term,
    TermId, TermQuery, TermRef,
};
