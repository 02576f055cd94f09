//! Loading keypath mappings from localization tables.
//!
//! A mapping file is a flat table of strings, either JSON:
//!
//! ```json
//! { "Intro.Title": "Bienvenue", "Intro.Button": "Commencer" }
//! ```
//!
//! or TOML (chosen by the `.toml` extension):
//!
//! ```toml
//! "Intro.Title" = "Bienvenue"
//! "Intro.Button" = "Commencer"
//! ```

use crate::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads a mapping file, picking the format from its extension.
pub fn load_mapping<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let values = if is_toml {
        parse_toml_mapping(&content)?
    } else {
        parse_json_mapping(&content)?
    };

    tracing::debug!(path = %path.display(), entries = values.len(), "loaded text mapping");
    Ok(values)
}

/// Parses a flat JSON object of strings.
pub fn parse_json_mapping(content: &str) -> Result<HashMap<String, String>> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;

    object
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(text) => Ok((key, text)),
            other => Err(Error::InvalidMapping {
                key,
                found: json_kind(&other).to_string(),
            }),
        })
        .collect()
}

/// Parses a flat TOML table of strings.
pub fn parse_toml_mapping(content: &str) -> Result<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(content)?;

    table
        .into_iter()
        .map(|(key, value)| match value {
            toml::Value::String(text) => Ok((key, text)),
            other => Err(Error::InvalidMapping {
                key,
                found: other.type_str().to_string(),
            }),
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
