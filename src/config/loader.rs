//! Configuration loading and schema validation

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{FieldViolation, SousError, SousResult};

use super::edn::parse_edn;
use super::types::DeliveryConfig;

const EXPECT_STRING: &str = "a string";
const EXPECT_PORT: &str = "an integer between 1 and 65535";
const EXPECT_STRING_LIST: &str = "a sequence of strings";
const EXPECT_MAP: &str = "a map";

/// Load the config file and validate every recognized key.
///
/// `.toml` files are read as TOML, anything else as EDN. All violations are
/// collected before failing so the report lists each offending field once.
/// No defaults are applied here.
pub fn load_config(path: &Path) -> SousResult<DeliveryConfig> {
    if !path.is_file() {
        return Err(SousError::ConfigMissing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let syntax = |message: String| SousError::ConfigSyntax {
        file: path.to_path_buf(),
        message,
    };

    let document = if is_toml(path) {
        let table: toml::Table =
            toml::from_str(&content).map_err(|e| syntax(e.message().to_string()))?;
        serde_json::to_value(table)?
    } else {
        parse_edn(&content).map_err(syntax)?
    };

    let map = match document {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(syntax(format!(
                "expected a map at the top level, got {}",
                other
            )))
        }
    };

    validate(&map).map_err(|violations| SousError::ConfigInvalid {
        file: path.to_path_buf(),
        violations,
    })
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}

/// Check a parsed top-level map against the config schema.
pub fn validate(map: &Map<String, Value>) -> Result<DeliveryConfig, Vec<FieldViolation>> {
    let mut violations = Vec::new();
    let mut config = DeliveryConfig::default();

    for (key, value) in map {
        match key.as_str() {
            "host" => config.host = expect_string(key, value, &mut violations),
            "user" => config.user = expect_string(key, value, &mut violations),
            "secrets" => config.secrets = expect_string(key, value, &mut violations),
            "remote-dir" => config.remote_dir = expect_string(key, value, &mut violations),
            "port" => config.port = expect_port(key, value, &mut violations),
            "run-list" => config.run_list = expect_string_list(key, value, &mut violations),
            "attributes" => config.attributes = expect_map(key, value, &mut violations),
            other => tracing::debug!(key = other, "ignoring unknown config key"),
        }
    }

    if violations.is_empty() {
        Ok(config)
    } else {
        Err(violations)
    }
}

fn violation(field: &str, expected: &'static str, actual: &Value) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        expected,
        actual: actual.to_string(),
    }
}

fn expect_string(
    field: &str,
    value: &Value,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            violations.push(violation(field, EXPECT_STRING, other));
            None
        }
    }
}

fn expect_port(field: &str, value: &Value, violations: &mut Vec<FieldViolation>) -> Option<u16> {
    match value.as_i64().map(u16::try_from) {
        Some(Ok(port)) if port > 0 => Some(port),
        _ => {
            violations.push(violation(field, EXPECT_PORT, value));
            None
        }
    }
}

fn expect_string_list(
    field: &str,
    value: &Value,
    violations: &mut Vec<FieldViolation>,
) -> Option<Vec<String>> {
    let Value::Array(items) = value else {
        violations.push(violation(field, EXPECT_STRING_LIST, value));
        return None;
    };

    let strings: Option<Vec<String>> = items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect();
    if strings.is_none() {
        violations.push(violation(field, EXPECT_STRING_LIST, value));
    }
    strings
}

fn expect_map(
    field: &str,
    value: &Value,
    violations: &mut Vec<FieldViolation>,
) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map.clone()),
        other => {
            violations.push(violation(field, EXPECT_MAP, other));
            None
        }
    }
}
