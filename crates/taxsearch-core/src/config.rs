//! Host configuration for taxsearch.
//!
//! [`HostConfig::load`] layers an optional TOML/JSON/YAML file and
//! `TAXSEARCH__SECTION__KEY` environment variables over the built-in
//! defaults. [`HostConfig::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::addon::SearchAddon;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[addon]
name       = "advanced-search"
version    = "1.0.0"
assets_url = "/assets"

[site]
home_url = "http://127.0.0.1:8080"
bind     = "127.0.0.1:8080"

[data]
settings = "settings.json"
catalog  = "catalog.toml"
"#;

const ENV_PREFIX: &str = "TAXSEARCH";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level host configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub addon: AddonConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub data: DataConfig,
    /// Translations for the form's fixed strings.
    #[serde(default)]
    pub strings: Vec<StringOverride>,
}

/// `[addon]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AddonConfig {
    #[serde(default = "default_addon_name")]
    pub name: String,
    #[serde(default = "default_addon_version")]
    pub version: String,
    #[serde(default = "default_assets_url")]
    pub assets_url: String,
}

fn default_addon_name() -> String { "advanced-search".to_string() }
fn default_addon_version() -> String { "1.0.0".to_string() }
fn default_assets_url() -> String { "/assets".to_string() }

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            name: default_addon_name(),
            version: default_addon_version(),
            assets_url: default_assets_url(),
        }
    }
}

/// `[site]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_home_url")]
    pub home_url: String,
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_home_url() -> String { "http://127.0.0.1:8080".to_string() }
fn default_bind() -> String { "127.0.0.1:8080".to_string() }

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_url: default_home_url(),
            bind: default_bind(),
        }
    }
}

/// `[data]` section. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_settings_path")]
    pub settings: PathBuf,
    #[serde(default = "default_catalog_path")]
    pub catalog: PathBuf,
}

fn default_settings_path() -> PathBuf { PathBuf::from("settings.json") }
fn default_catalog_path() -> PathBuf { PathBuf::from("catalog.toml") }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            settings: default_settings_path(),
            catalog: default_catalog_path(),
        }
    }
}

/// One `[[strings]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StringOverride {
    pub context: String,
    pub text: String,
    pub translation: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl HostConfig {
    /// Layer `path` (if given) and the environment over the built-in defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The add-on described by the `[addon]` section.
    pub fn addon(&self) -> SearchAddon {
        SearchAddon::new(&self.addon.name, &self.addon.version, &self.addon.assets_url)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
