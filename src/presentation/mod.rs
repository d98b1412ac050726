//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `factory` - creates use cases with their infrastructure dependencies

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_deploy_use_case, create_init_use_case, create_remote_shell};
