//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod payload_transfer;
pub mod policy_tool;
pub mod remote_shell;

pub use deploy_events::{DeployEvent, DeployEventSink, DeployStep, NoopEventSink};
pub use payload_transfer::PayloadTransfer;
pub use policy_tool::PolicyTool;
pub use remote_shell::{RemoteCommandResult, RemoteShell, SSH_CONNECTION_FAILURE};
