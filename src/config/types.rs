//! Configuration type definitions

use serde_json::{Map, Value};

/// Built-in defaults, applied only when the Context is resolved.
pub mod defaults {
    pub const CONFIG_FILE: &str = "delivery.edn";
    pub const SECRETS_FILE: &str = "secrets.edn";
    pub const PORT: u16 = 22;
    pub const USER: &str = "root";
    pub const REMOTE_DIR: &str = "/chef";
    pub const POLICYFILE: &str = "Policyfile.rb";
    pub const ATTRIBUTES_FILE: &str = "attributes.json";
}

/// The validated contents of `delivery.edn`.
///
/// Every field is optional; absence means "fall through to the built-in
/// default" during resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub secrets: Option<String>,
    pub remote_dir: Option<String>,
    pub run_list: Option<Vec<String>>,
    pub attributes: Option<Map<String, Value>>,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub secrets: Option<String>,
    pub remote_dir: Option<String>,
    pub run_list: Option<Vec<String>>,
    pub keep_order: bool,
    pub chef_version: Option<String>,
}
