//! taxsearch: taxonomy filters for site search.
//!
//! The binary wires the [`taxsearch_core`] components to the file-backed
//! collaborators in [`taxsearch_host`]. This library half exposes that wiring
//! ([`site::Site`]) and the HTTP demo host ([`server`]) so integration tests
//! can import them directly.
//!
//! # Request flow
//!
//! ```text
//! GET /            ──► asset hooks ──► page with shortcode form
//! GET /?s=…&select-…  ──► pre-search hook ──► installed filter (JSON)
//! ```

pub mod server;
pub mod site;

pub use site::Site;
