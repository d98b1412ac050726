//! Infrastructure Layer
//!
//! Adapters that implement domain ports against real processes and files:
//! - `chef`: Policyfile packaging via the `chef` CLI
//! - `ssh`: remote script execution with live output
//! - `sync`: payload transfer via rsync
//! - `events`: NDJSON deploy event sink
//! - `secrets`: secrets file loading

pub mod chef;
pub mod events;
pub mod process;
pub mod secrets;
pub mod ssh;
pub mod sync;

pub use chef::ChefCli;
pub use events::JsonEventSink;
pub use secrets::load_secrets;
pub use ssh::{LiveOutput, SshExecutor, Tee};
pub use sync::RsyncTransfer;
