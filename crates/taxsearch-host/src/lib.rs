//! taxsearch-host: host collaborator implementations for taxsearch.
//!
//! Each adapter implements one of the [`taxsearch_core::host`] traits on top
//! of plain files or in-memory data, so the binary can run as a small
//! standalone host and tests can assemble a request without any platform.

pub mod assets;
pub mod catalog;
pub mod error;
pub mod markup;
pub mod request;
pub mod settings;
pub mod shortcodes;

pub use assets::AssetRegistry;
pub use catalog::TaxonomyCatalog;
pub use error::HostError;
pub use markup::HtmlMarkup;
pub use request::{QueryParams, SearchRequest};
pub use settings::{FileSettingsStore, MemorySettingsStore};
pub use shortcodes::ShortcodeRegistry;
