//! A standalone host assembled from configuration.

use taxsearch_core::config::HostConfig;
use taxsearch_core::host::{Markup, SettingsStore, TermProvider};
use taxsearch_core::{FilterError, SearchAddon};
use taxsearch_host::{
    AssetRegistry, FileSettingsStore, HtmlMarkup, QueryParams, SearchRequest, ShortcodeRegistry, TaxonomyCatalog,
};

/// The add-on plus every collaborator it needs.
pub struct Site {
    pub addon: SearchAddon,
    pub settings: Box<dyn SettingsStore + Send + Sync>,
    pub terms: Box<dyn TermProvider + Send + Sync>,
    pub markup: Box<dyn Markup + Send + Sync>,
}

impl Site {
    pub fn new(
        addon: SearchAddon,
        settings: impl SettingsStore + Send + Sync + 'static,
        terms: impl TermProvider + Send + Sync + 'static,
        markup: impl Markup + Send + Sync + 'static,
    ) -> Self {
        Self {
            addon,
            settings: Box::new(settings),
            terms: Box::new(terms),
            markup: Box::new(markup),
        }
    }

    /// Build the file-backed site described by `config`.
    ///
    /// A missing catalog file is not fatal: the site runs with no taxonomies
    /// and every dropdown is skipped.
    pub fn from_config(config: &HostConfig) -> anyhow::Result<Self> {
        let catalog = if config.data.catalog.exists() {
            TaxonomyCatalog::load(&config.data.catalog)?
        } else {
            tracing::warn!(path = %config.data.catalog.display(), "catalog not found, no taxonomies available");
            TaxonomyCatalog::default()
        };
        let markup = HtmlMarkup::new(&config.site.home_url).with_strings(&config.strings);
        Ok(Self::new(
            config.addon(),
            FileSettingsStore::new(&config.data.settings),
            catalog,
            markup,
        ))
    }

    /// Run both asset hooks for one page render.
    pub fn assets(&self) -> AssetRegistry {
        let mut registry = AssetRegistry::new();
        self.addon.enqueue_styles(self.settings.as_ref(), &mut registry);
        self.addon.enqueue_scripts(self.settings.as_ref(), &mut registry);
        registry
    }

    /// Expand the shortcode.
    pub fn form(&self) -> String {
        self.addon
            .shortcode(self.settings.as_ref(), self.terms.as_ref(), self.markup.as_ref())
    }

    /// Expand the shortcodes in page content.
    pub fn render_content(&self, content: &str) -> String {
        let mut shortcodes = ShortcodeRegistry::new();
        self.addon.register_shortcode(
            self.settings.as_ref(),
            self.terms.as_ref(),
            self.markup.as_ref(),
            &mut shortcodes,
        );
        shortcodes.expand(content)
    }

    /// Run the pre-search hook for a request.
    pub fn search(&self, params: &QueryParams) -> Result<SearchRequest, FilterError> {
        let mut request = SearchRequest::from_params(params);
        self.addon.filter_search_query(
            self.settings.as_ref(),
            self.terms.as_ref(),
            params,
            &mut request,
        )?;
        Ok(request)
    }
}
