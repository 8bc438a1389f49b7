//! On-disk fixtures used by the process-level and file-backed harnesses.

use std::path::{Path, PathBuf};

/// A catalog with one populated taxonomy, one with an empty term, and one
/// with no terms at all.
pub const CATALOG_TOML: &str = r#"
[[taxonomies]]
key   = "color"
label = "Colors"
terms = [
    { id = 7, name = "Red", slug = "red", count = 12 },
    { id = 9, name = "Blue", slug = "blue", count = 0 },
]

[[taxonomies]]
key   = "size"
label = "Sizes"
terms = []

[[taxonomies]]
key   = "brand"
label = "Brands & Makers"
terms = [
    { id = 21, name = "Acme <Pro>", slug = "acme", count = 3 },
]
"#;

/// Settings file with every toggle on.
pub const SETTINGS_JSON: &str = r#"{
  "advanced-search-settings": {
    "toggle-css": "1",
    "toggle-select2": "1",
    "toggle-search-input": "1",
    "taxonomy": ["color", "size", "brand"],
    "toggle-relation": "AND"
  }
}"#;

/// Write catalog, settings, and a config file pointing at both into `dir`.
/// Returns the config path.
pub fn write_site_files(dir: &Path) -> std::io::Result<PathBuf> {
    let catalog = dir.join("catalog.toml");
    let settings = dir.join("settings.json");
    let config = dir.join("taxsearch.toml");

    std::fs::write(&catalog, CATALOG_TOML)?;
    std::fs::write(&settings, SETTINGS_JSON)?;
    std::fs::write(
        &config,
        format!(
            r#"
[site]
home_url = "https://shop.test"

[data]
settings = {settings:?}
catalog  = {catalog:?}

[[strings]]
context     = "submit button"
text        = "Submit"
translation = "Find"
"#,
            settings = settings.display().to_string(),
            catalog = catalog.display().to_string(),
        ),
    )?;
    Ok(config)
}
