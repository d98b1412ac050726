//! Attribute payload assembly
//!
//! Secrets are nested under `secrets`; explicit attributes are laid over the
//! top so a same-named attribute key always wins.

use serde::Serialize;
use serde_json::{Map, Value};

/// Key the secrets document is nested under.
pub const SECRETS_KEY: &str = "secrets";

/// What happened to `attributes.json` during staging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageOutcome {
    /// File written for this run
    Written,
    /// File already present from an earlier partial run; left untouched
    AlreadyPresent,
    /// Merged payload was not a JSON object; nothing written
    SkippedNotObject,
}

/// Merge secrets and attributes into the payload handed to chef-client.
pub fn merge_attributes(attributes: Option<&Map<String, Value>>, secrets: Option<Value>) -> Value {
    let mut payload = Map::new();
    if let Some(secrets) = secrets {
        payload.insert(SECRETS_KEY.to_string(), secrets);
    }
    if let Some(attributes) = attributes {
        for (key, value) in attributes {
            payload.insert(key.clone(), value.clone());
        }
    }
    Value::Object(payload)
}
