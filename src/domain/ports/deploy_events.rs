//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables console progress, JSON event streams, and debugging.

use std::fmt;
use std::path::PathBuf;

use crate::domain::services::StageOutcome;

/// Pipeline steps that report a start event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Package,
    StageAttributes,
    Transfer,
    Converge,
}

impl DeployStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::StageAttributes => "stage-attributes",
            Self::Transfer => "transfer",
            Self::Converge => "converge",
        }
    }
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Staging directory acquired
    Started {
        destination: String,
        staging_dir: PathBuf,
    },

    /// A pipeline step is about to run
    StepStarted { step: DeployStep },

    /// attributes.json handled
    AttributesStaged {
        path: PathBuf,
        outcome: StageOutcome,
    },

    /// Payload copied to the remote directory
    Transferred { destination: String },

    /// Remote converge exited
    ConvergeFinished {
        success: bool,
        exit_code: Option<i32>,
    },

    /// chef-client dumped a stacktrace; its contents follow
    StacktraceFound { path: String },

    /// Staging directory left in place at the operator's request
    StagingRetained { path: PathBuf },

    /// Staging directory removed
    StagingRemoved { path: PathBuf },

    /// Deploy finished. Always the last event, even when no staging
    /// directory could be created.
    Completed { success: bool },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable progress in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
