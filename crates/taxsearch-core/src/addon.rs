//! The add-on's hook surface.
//!
//! [`SearchAddon`] owns the identity of the add-on (name, version, asset
//! location) and exposes one method per host hook. Each method reads a fresh
//! settings snapshot, so a settings change applies to the next request
//! without any invalidation.

use crate::assets::{decide_assets, AssetManifest};
use crate::error::FilterError;
use crate::filter::build_filter;
use crate::form::render_form;
use crate::host::{AssetPipeline, Markup, RequestParams, SearchQuery, SettingsStore, Shortcodes, TermProvider};
use crate::settings::Settings;

/// Shortcode tag the form is registered under.
pub const SHORTCODE_TAG: &str = "advanced_search";

#[derive(Debug, Clone)]
pub struct SearchAddon {
    plugin_name: String,
    version: String,
    manifest: AssetManifest,
}

impl SearchAddon {
    pub fn new(plugin_name: impl Into<String>, version: impl Into<String>, assets_url: impl Into<String>) -> Self {
        let plugin_name = plugin_name.into();
        let version = version.into();
        let manifest = AssetManifest::new(plugin_name.clone(), version.clone(), assets_url);
        Self {
            plugin_name,
            version,
            manifest,
        }
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Current settings snapshot.
    pub fn settings(&self, store: &dyn SettingsStore) -> Settings {
        Settings::load(store, &self.plugin_name)
    }

    /// Style hook: attach the stylesheets the settings ask for.
    pub fn enqueue_styles(&self, store: &dyn SettingsStore, pipeline: &mut dyn AssetPipeline) {
        let settings = self.settings(store);
        for asset in decide_assets(&settings).into_iter().filter(|a| a.is_style()) {
            if let Some(style) = self.manifest.style(asset) {
                tracing::debug!(handle = %style.handle, "enqueue style");
                pipeline.enqueue_style(style);
            }
        }
    }

    /// Script hook: attach the scripts the settings ask for.
    pub fn enqueue_scripts(&self, store: &dyn SettingsStore, pipeline: &mut dyn AssetPipeline) {
        let settings = self.settings(store);
        for asset in decide_assets(&settings).into_iter().filter(|a| a.is_script()) {
            if let Some(script) = self.manifest.script(asset) {
                tracing::debug!(handle = %script.handle, "enqueue script");
                pipeline.enqueue_script(script);
            }
        }
    }

    /// Pre-search hook: install the taxonomy filter on `query`.
    ///
    /// Returns `Ok(true)` when a filter was installed and `Ok(false)` when the
    /// query was left untouched. On error the query is also untouched; the
    /// host decides whether to abort the search or run it unfiltered.
    pub fn filter_search_query(
        &self,
        store: &dyn SettingsStore,
        terms: &dyn TermProvider,
        params: &dyn RequestParams,
        query: &mut dyn SearchQuery,
    ) -> Result<bool, FilterError> {
        let settings = self.settings(store);
        match build_filter(&settings, params, query.is_search(), terms)? {
            Some(filter) => {
                tracing::debug!(
                    relation = %filter.relation,
                    clauses = filter.clauses.len(),
                    "installing taxonomy filter"
                );
                query.set_taxonomy_filter(filter);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Register the search form under [`SHORTCODE_TAG`].
    pub fn register_shortcode<'a>(
        &'a self,
        store: &'a dyn SettingsStore,
        terms: &'a dyn TermProvider,
        markup: &'a dyn Markup,
        shortcodes: &mut dyn Shortcodes<'a>,
    ) {
        shortcodes.register(
            SHORTCODE_TAG,
            Box::new(move || self.shortcode(store, terms, markup)),
        );
    }

    /// Shortcode callback: the search form markup.
    pub fn shortcode(&self, store: &dyn SettingsStore, terms: &dyn TermProvider, markup: &dyn Markup) -> String {
        render_form(&self.settings(store), terms, markup)
    }
}
