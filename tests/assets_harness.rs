#![allow(unused)]
//! Asset conditioner integration harness.
//!
//! # What this covers
//!
//! - **Toggles**: the base stylesheet follows `toggle-css`; the select2
//!   stylesheet, the select2 script, and the base script follow
//!   `toggle-select2` together.
//! - **Pairing** (proptest): for any stored toggle values, the select2 script
//!   is never attached without the base script, and neither without the
//!   select2 toggle.
//! - **Hooks**: the style hook only registers styles and the script hook only
//!   registers scripts.
//!
//! # Running
//!
//! ```sh
//! cargo test --test assets_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};
use taxsearch_core::assets::decide_assets;
use taxsearch_core::AssetRef;
use taxsearch_host::AssetRegistry;

fn handles(registry: &AssetRegistry) -> (Vec<String>, Vec<String>) {
    (
        registry.styles().iter().map(|s| s.handle.clone()).collect(),
        registry.scripts().iter().map(|s| s.handle.clone()).collect(),
    )
}

#[test]
fn nothing_when_settings_missing() {
    let site = taxsearch::Site::new(
        addon(),
        taxsearch_host::MemorySettingsStore::new(),
        color_size_catalog(),
        markup(),
    );
    assert!(site.assets().is_empty());
}

#[test]
fn css_toggle_only() {
    let site = site(SettingsBlob::new().flag("toggle-css", "1"), color_size_catalog());
    let (styles, scripts) = handles(&site.assets());
    assert_eq!(styles, vec!["advanced-search".to_string()]);
    assert!(scripts.is_empty());
}

#[test]
fn select2_toggle_brings_pair() {
    let site = site(SettingsBlob::new().flag("toggle-select2", 1), color_size_catalog());
    let (styles, scripts) = handles(&site.assets());
    assert_eq!(styles, vec!["advanced-search-select2".to_string()]);
    assert_eq!(
        scripts,
        vec!["advanced-search-select2".to_string(), "advanced-search".to_string()]
    );
}

#[test]
fn rendered_tags() {
    let site = site(
        SettingsBlob::new().flag("toggle-css", true).flag("toggle-select2", true),
        color_size_catalog(),
    );
    let assets = site.assets();
    insta::assert_snapshot!(assets.head_html(), @r#"
    <link rel="stylesheet" id="advanced-search-css" href="/assets/css/advanced-search-public.css?ver=1.0.0" media="all" />
    <link rel="stylesheet" id="advanced-search-select2-css" href="/assets/css/select2.min.css?ver=4.0.3" media="all" />
    "#);
    insta::assert_snapshot!(assets.footer_html(), @r#"
    <script src="/assets/js/select2.full.min.js?ver=4.0.3" id="advanced-search-select2-js"></script>
    <script src="/assets/js/advanced-search-public.js?ver=1.0.0" id="advanced-search-js"></script>
    "#);
}

#[test]
fn hooks_register_their_own_kind() {
    let store = SettingsBlob::new()
        .flag("toggle-css", "1")
        .flag("toggle-select2", "1")
        .store();

    let mut styles_only = AssetRegistry::new();
    addon().enqueue_styles(&store, &mut styles_only);
    assert_eq!(styles_only.styles().len(), 2);
    assert!(styles_only.scripts().is_empty());

    let mut scripts_only = AssetRegistry::new();
    addon().enqueue_scripts(&store, &mut scripts_only);
    assert!(scripts_only.styles().is_empty());
    assert_eq!(scripts_only.scripts().len(), 2);
}

fn toggle_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (0i64..3).prop_map(|n| json!(n)),
        prop::sample::select(vec!["", "0", "1", "on", "off", "yes"]).prop_map(|s| json!(s)),
    ]
}

proptest! {
    #[test]
    fn prop_select2_script_always_paired(css in toggle_value(), select2 in toggle_value()) {
        let settings = SettingsBlob::new()
            .flag("toggle-css", css)
            .flag("toggle-select2", select2)
            .settings();
        let assets = decide_assets(&settings);

        prop_assert_eq!(
            assets.contains(&AssetRef::Select2Script),
            assets.contains(&AssetRef::BaseScript)
        );
        if !settings.load_select2 {
            prop_assert!(!assets.contains(&AssetRef::Select2Script));
            prop_assert!(!assets.contains(&AssetRef::BaseScript));
            prop_assert!(!assets.contains(&AssetRef::Select2Style));
        }
        prop_assert_eq!(assets.contains(&AssetRef::BaseStyle), settings.load_css);
    }
}
