//! Secrets file loader
//!
//! The secrets file is optional and read-only. Its format follows the
//! extension: `.json`, `.yaml`/`.yml`, `.toml`, otherwise EDN. Contents are
//! never logged.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::parse_edn;
use crate::error::{SousError, SousResult};

/// Load the secrets document, or `None` when the file does not exist.
pub fn load_secrets(path: &Path) -> SousResult<Option<Value>> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no secrets file");
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let invalid = |message: String| SousError::SecretsInvalid {
        file: path.to_path_buf(),
        message,
    };

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let value = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?,
        Some("yaml") | Some("yml") => {
            serde_yaml_ng::from_str(&content).map_err(|e| invalid(e.to_string()))?
        }
        Some("toml") => {
            let table: toml::Table =
                toml::from_str(&content).map_err(|e| invalid(e.message().to_string()))?;
            serde_json::to_value(table)?
        }
        _ => parse_edn(&content).map_err(invalid)?,
    };
    if value.is_null() {
        tracing::debug!(path = %path.display(), "secrets file is empty");
        return Ok(None);
    }

    tracing::debug!(path = %path.display(), "loaded secrets");
    Ok(Some(value))
}
