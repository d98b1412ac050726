//! Application Layer
//!
//! Use cases that orchestrate domain services through ports:
//! - `deploy`: package, stage, transfer, converge
//! - `init`: scaffold a new project
//! - `update`: re-lock the policy
//! - `bootstrap`: prepare a fresh host

pub mod bootstrap;
pub mod deploy;
pub mod init;
pub mod update;

pub use bootstrap::bootstrap_host;
pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use init::{InitOptions, InitResult, InitUseCase};
pub use update::update_policy;
