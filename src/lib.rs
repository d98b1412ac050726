//! Sous - single-host Chef converge orchestrator
//!
//! Sous packages a Policyfile locally, ships it to one host over rsync,
//! and runs chef-client in local mode there over ssh.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployResult, DeployUseCase};
pub use config::{resolve, CliOverrides, Context};
pub use error::{FieldViolation, SousError, SousResult};
