//! Settings snapshot: the typed view of the host-stored option blob.
//!
//! The host persists the add-on's options as a loosely typed blob: any key
//! may be missing and values arrive as booleans, numbers, or strings
//! depending on how the admin form saved them. [`Settings::from_value`] is the
//! one place that blob is interpreted. Every field decodes on its own and
//! falls back to its default when malformed, so a single bad value never
//! turns the rest of the configuration off.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::host::SettingsStore;
use crate::types::Relation;

/// Per-request snapshot of the add-on settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Attach the base stylesheet.
    #[serde(rename = "toggle-css", default, deserialize_with = "lenient_flag")]
    pub load_css: bool,
    /// Attach the select2 stylesheet and script pair.
    #[serde(rename = "toggle-select2", default, deserialize_with = "lenient_flag")]
    pub load_select2: bool,
    /// Visually hide the free-text input. The field is still rendered.
    #[serde(rename = "toggle-search-input", default, deserialize_with = "lenient_flag")]
    pub hide_search_input: bool,
    /// Taxonomy keys offered as filters, in display order.
    #[serde(rename = "taxonomy", default, deserialize_with = "lenient_taxonomies")]
    pub taxonomies: Vec<String>,
    #[serde(rename = "toggle-relation", default, deserialize_with = "lenient_relation")]
    pub relation: Relation,
}

impl Settings {
    /// Option key under which the host stores the blob for `plugin_name`.
    pub fn option_key(plugin_name: &str) -> String {
        format!("{plugin_name}-settings")
    }

    /// Interpret a stored blob. Never fails: anything that is not a JSON
    /// object yields the all-off defaults.
    pub fn from_value(value: &Value) -> Settings {
        match value {
            Value::Object(_) => Settings::deserialize(value).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "settings blob rejected, using defaults");
                Settings::default()
            }),
            Value::Null => Settings::default(),
            other => {
                tracing::warn!(kind = value_kind(other), "settings blob is not an object, using defaults");
                Settings::default()
            }
        }
    }

    /// Read the snapshot for `plugin_name` from `store`.
    pub fn load(store: &dyn SettingsStore, plugin_name: &str) -> Settings {
        let key = Self::option_key(plugin_name);
        match store.get(&key) {
            Some(value) => Self::from_value(&value),
            None => {
                tracing::debug!(key = %key, "no stored settings, using defaults");
                Settings::default()
            }
        }
    }

    pub fn has_taxonomies(&self) -> bool {
        !self.taxonomies.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Field decoders
// ---------------------------------------------------------------------------

/// Host toggles are saved as `1`, `"1"`, `true`, or checkbox strings.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_u64() == Some(1) || n.as_f64() == Some(1.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        ),
        _ => false,
    }
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn lenient_taxonomies<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::String(_) => vec![value],
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(kind = value_kind(&other), "taxonomy setting ignored");
            Vec::new()
        }
    };

    let mut keys: Vec<String> = Vec::with_capacity(raw.len());
    for item in raw {
        match item {
            Value::String(key) if !key.trim().is_empty() => {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            other => {
                tracing::warn!(entry = %other, "dropping taxonomy entry");
            }
        }
    }
    Ok(keys)
}

fn lenient_relation<'de, D>(deserializer: D) -> Result<Relation, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let relation = match &value {
        Value::String(s) if s.trim().is_empty() => Relation::default(),
        Value::String(s) => Relation::parse(s).unwrap_or_else(|| {
            tracing::warn!(value = %s, "unrecognized relation, falling back to OR");
            Relation::default()
        }),
        Value::Null => Relation::default(),
        other => {
            tracing::warn!(value = %other, "unrecognized relation, falling back to OR");
            Relation::default()
        }
    };
    Ok(relation)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
