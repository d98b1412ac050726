//! Execution context resolution
//!
//! Precedence, evaluated independently for each field:
//! 1. CLI flags (highest priority)
//! 2. Config file (`delivery.edn`)
//! 3. Built-in defaults (lowest priority)

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{SousError, SousResult};

use super::loader::load_config;
use super::types::{defaults, CliOverrides, DeliveryConfig};

/// Resolved, immutable parameters for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub host: Option<String>,
    pub port: u16,
    pub user: String,
    pub run_list: Option<Vec<String>>,
    pub secrets_path: PathBuf,
    pub remote_dir: String,
    pub attributes: Option<Map<String, Value>>,
    pub config_file: PathBuf,
    pub project_dir: PathBuf,
    pub keep_order: bool,
    pub chef_version: Option<String>,
}

impl Context {
    /// Merge a validated config file with CLI overrides.
    pub fn merge(config_file: &Path, file: DeliveryConfig, cli: CliOverrides) -> Self {
        let project_dir = project_dir_of(config_file);

        let secrets = cli
            .secrets
            .or(file.secrets)
            .unwrap_or_else(|| defaults::SECRETS_FILE.to_string());
        let secrets_path = if Path::new(&secrets).is_absolute() {
            PathBuf::from(secrets)
        } else {
            project_dir.join(secrets)
        };

        Self {
            host: cli.host.or(file.host),
            port: cli.port.or(file.port).unwrap_or(defaults::PORT),
            user: cli
                .user
                .or(file.user)
                .unwrap_or_else(|| defaults::USER.to_string()),
            run_list: cli.run_list.or(file.run_list),
            secrets_path,
            remote_dir: cli
                .remote_dir
                .or(file.remote_dir)
                .unwrap_or_else(|| defaults::REMOTE_DIR.to_string()),
            attributes: file.attributes,
            config_file: config_file.to_path_buf(),
            project_dir,
            keep_order: cli.keep_order,
            chef_version: cli.chef_version,
        }
    }

    /// The host, or `HostMissing` for verbs that must reach the remote.
    pub fn require_host(&self) -> SousResult<&str> {
        self.host.as_deref().ok_or(SousError::HostMissing)
    }

    /// `user@host`, as used by ssh and rsync.
    pub fn destination(&self) -> SousResult<String> {
        Ok(format!("{}@{}", self.user, self.require_host()?))
    }

    pub fn policyfile(&self) -> PathBuf {
        self.project_dir.join(defaults::POLICYFILE)
    }
}

/// Load `config_file` and merge it with `cli` into a [`Context`].
///
/// The config path is made absolute first so `project_dir` stays valid for
/// tools that run with a different working directory.
pub fn resolve(config_file: &Path, cli: CliOverrides) -> SousResult<Context> {
    let file = load_config(config_file)?;
    let config_file = std::path::absolute(config_file)?;
    let context = Context::merge(&config_file, file, cli);
    tracing::debug!(
        config = %context.config_file.display(),
        host = ?context.host,
        port = context.port,
        user = %context.user,
        remote_dir = %context.remote_dir,
        "resolved context"
    );
    Ok(context)
}

fn project_dir_of(config_file: &Path) -> PathBuf {
    config_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
