//! Error types for Sous
//!
//! Uses `thiserror` for library errors; commands wrap them in `anyhow`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::SSH_CONNECTION_FAILURE;

/// Result type alias for Sous operations
pub type SousResult<T> = Result<T, SousError>;

/// A single schema violation found while validating the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub expected: &'static str,
    pub actual: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Main error type for Sous operations
#[derive(Error, Debug)]
pub enum SousError {
    /// Config file does not exist
    #[error("config file not found: {path}")]
    ConfigMissing { path: PathBuf },

    /// Config file could not be parsed
    #[error("config file {file} could not be parsed: {message}")]
    ConfigSyntax { file: PathBuf, message: String },

    /// Config file parsed but violates the schema
    #[error("invalid config file {file}:\n{}", render_violations(.violations))]
    ConfigInvalid {
        file: PathBuf,
        violations: Vec<FieldViolation>,
    },

    /// Secrets file exists but could not be parsed
    #[error("secrets file {file} could not be parsed: {message}")]
    SecretsInvalid { file: PathBuf, message: String },

    /// Remote operation requested without a host
    #[error("no host configured - set `host` in the config file or pass --host")]
    HostMissing,

    /// A required local binary is not on PATH
    #[error("`{tool}` was not found on PATH. {guidance}")]
    ToolMissing { tool: String, guidance: String },

    /// The policy tool exited non-zero
    #[error("`{step}` failed with exit code {}", render_code(.exit_code))]
    PackageFailed {
        step: String,
        exit_code: Option<i32>,
    },

    /// rsync exited non-zero
    #[error("transfer failed: rsync exited with code {}", render_code(.exit_code))]
    TransferFailed { exit_code: Option<i32> },

    /// ssh could not reach or authenticate against the host
    #[error("could not connect to the remote host (ssh exited with code 255)")]
    RemoteConnectionFailure,

    /// The remote script ran but exited non-zero
    #[error("remote command failed with exit code {}", render_code(.exit_code))]
    RemoteCommandFailure { exit_code: Option<i32> },

    /// `init` target already holds a project
    #[error("a project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Staging directory could not be removed
    #[error("failed to remove staging directory {path}: {source}")]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SousError {
    pub fn tool_missing(tool: &str) -> Self {
        let guidance = match tool {
            "chef" | "knife" => {
                "Install Chef Workstation: https://docs.chef.io/workstation/install_workstation/"
            }
            "rsync" => "Install rsync with your system package manager.",
            "ssh" => "Install an OpenSSH client.",
            _ => "Install it and make sure it is on PATH.",
        };
        Self::ToolMissing {
            tool: tool.to_string(),
            guidance: guidance.to_string(),
        }
    }

    /// Stable kebab-case identifier for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigMissing { .. } => "config-missing",
            Self::ConfigSyntax { .. } => "config-syntax",
            Self::ConfigInvalid { .. } => "config-invalid",
            Self::SecretsInvalid { .. } => "secrets-invalid",
            Self::HostMissing => "host-missing",
            Self::ToolMissing { .. } => "tool-missing",
            Self::PackageFailed { .. } => "package-failed",
            Self::TransferFailed { .. } => "transfer-failed",
            Self::RemoteConnectionFailure => "remote-connection-failure",
            Self::RemoteCommandFailure { .. } => "remote-command-failure",
            Self::ProjectExists { .. } => "project-exists",
            Self::CleanupFailed { .. } => "cleanup-failed",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }

    /// Exit code of the external process behind this failure, if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::PackageFailed { exit_code, .. }
            | Self::TransferFailed { exit_code }
            | Self::RemoteCommandFailure { exit_code } => *exit_code,
            Self::RemoteConnectionFailure => Some(SSH_CONNECTION_FAILURE),
            _ => None,
        }
    }

    /// Classify a failed remote exit code.
    pub fn from_remote_exit(exit_code: Option<i32>) -> Self {
        match exit_code {
            Some(SSH_CONNECTION_FAILURE) => Self::RemoteConnectionFailure,
            code => Self::RemoteCommandFailure { exit_code: code },
        }
    }
}

fn render_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_invalid_lists_every_field() {
        let err = SousError::ConfigInvalid {
            file: PathBuf::from("delivery.edn"),
            violations: vec![
                FieldViolation {
                    field: "port".to_string(),
                    expected: "an integer between 1 and 65535",
                    actual: "\"22\"".to_string(),
                },
                FieldViolation {
                    field: "user".to_string(),
                    expected: "a string",
                    actual: "5".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "invalid config file delivery.edn:\n  \
             - port: expected an integer between 1 and 65535, got \"22\"\n  \
             - user: expected a string, got 5"
        );
    }

    #[test]
    fn test_error_display_tool_missing() {
        let err = SousError::tool_missing("rsync");
        assert_eq!(
            err.to_string(),
            "`rsync` was not found on PATH. Install rsync with your system package manager."
        );
    }

    #[test]
    fn test_remote_exit_255_is_connection_failure() {
        assert!(matches!(
            SousError::from_remote_exit(Some(255)),
            SousError::RemoteConnectionFailure
        ));
        assert!(matches!(
            SousError::from_remote_exit(Some(1)),
            SousError::RemoteCommandFailure { exit_code: Some(1) }
        ));
    }

    #[test]
    fn test_package_failed_signal_display() {
        let err = SousError::PackageFailed {
            step: "chef export".to_string(),
            exit_code: None,
        };
        assert_eq!(
            err.to_string(),
            "`chef export` failed with exit code none (terminated by signal)"
        );
    }
}
