//! Asset conditioner: which optional stylesheets and scripts to attach.
//!
//! [`decide_assets`] is a pure function of the settings snapshot. The
//! [`AssetManifest`] turns the decision into concrete registrations for the
//! host pipeline.

use std::collections::BTreeSet;

use crate::settings::Settings;
use crate::types::{AssetRef, ScriptAsset, StyleAsset};

/// Version of the bundled select2 build.
pub const SELECT2_VERSION: &str = "4.0.3";

/// Decide which assets this request needs.
///
/// The base script only ships alongside the select2 script; there is no
/// separate toggle for it.
pub fn decide_assets(settings: &Settings) -> BTreeSet<AssetRef> {
    let mut assets = BTreeSet::new();
    if settings.load_css {
        assets.insert(AssetRef::BaseStyle);
    }
    if settings.load_select2 {
        assets.insert(AssetRef::Select2Style);
        assets.insert(AssetRef::Select2Script);
        assets.insert(AssetRef::BaseScript);
    }
    assets
}

/// Where the add-on's assets live and how they are versioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    pub plugin_name: String,
    pub version: String,
    /// URL of the public asset directory, with or without a trailing slash.
    pub base_url: String,
}

impl AssetManifest {
    pub fn new(
        plugin_name: impl Into<String>,
        version: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            version: version.into(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn select2_handle(&self) -> String {
        format!("{}-select2", self.plugin_name)
    }

    /// The stylesheet registration for `asset`, or `None` for scripts.
    pub fn style(&self, asset: AssetRef) -> Option<StyleAsset> {
        let (handle, src, version) = match asset {
            AssetRef::BaseStyle => (
                self.plugin_name.clone(),
                self.url(&format!("css/{}-public.css", self.plugin_name)),
                self.version.clone(),
            ),
            AssetRef::Select2Style => (
                self.select2_handle(),
                self.url("css/select2.min.css"),
                SELECT2_VERSION.to_string(),
            ),
            AssetRef::Select2Script | AssetRef::BaseScript => return None,
        };
        Some(StyleAsset {
            handle,
            src,
            deps: Vec::new(),
            version,
            media: "all".to_string(),
        })
    }

    /// The script registration for `asset`, or `None` for stylesheets.
    pub fn script(&self, asset: AssetRef) -> Option<ScriptAsset> {
        let (handle, src, version) = match asset {
            AssetRef::Select2Script => (
                self.select2_handle(),
                self.url("js/select2.full.min.js"),
                SELECT2_VERSION.to_string(),
            ),
            AssetRef::BaseScript => (
                self.plugin_name.clone(),
                self.url(&format!("js/{}-public.js", self.plugin_name)),
                self.version.clone(),
            ),
            AssetRef::BaseStyle | AssetRef::Select2Style => return None,
        };
        Some(ScriptAsset {
            handle,
            src,
            deps: vec!["jquery".to_string()],
            version,
            in_footer: true,
        })
    }
}
