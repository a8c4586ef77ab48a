//! Template and value file loading for the command-line interface.
//! Files are parsed according to their extension: `.json` via serde_json,
//! `.yml`/`.yaml` via serde_yaml.

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

fn extension(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase())
        .ok_or_else(|| Error::UnsupportedFormatError(path.display().to_string()))
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    match extension(path)?.as_str() {
        "json" => Ok(serde_json::from_str(&contents)?),
        "yml" | "yaml" => Ok(serde_yaml::from_str(&contents)?),
        other => Err(Error::UnsupportedFormatError(format!(
            "'{}' (supported: {})",
            other,
            SUPPORTED_EXTENSIONS.join(", ")
        ))),
    }
}

/// Loads a template rule file: an ordered mapping of rule pattern to target
/// pattern. Rule order in the file is preserved.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<IndexMap<String, String>> {
    debug!("loading template rules from {}", path.as_ref().display());
    load_file(path.as_ref())
}

/// Loads a source or target value file.
pub fn load_value<P: AsRef<Path>>(path: P) -> Result<Value> {
    debug!("loading value from {}", path.as_ref().display());
    load_file(path.as_ref())
}
