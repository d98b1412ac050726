//! Remote Shell Port
//!
//! Runs a script on the target host and hands back what it printed.

use crate::error::SousResult;

/// Exit code the OpenSSH client reserves for its own failures.
pub const SSH_CONNECTION_FAILURE: i32 = 255;

/// Outcome of one remote script invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommandResult {
    /// Exit status was zero
    pub success: bool,
    /// Raw exit code (`None` when killed by a signal)
    pub exit_code: Option<i32>,
    /// Combined stdout/stderr, split into lines
    pub output_lines: Vec<String>,
}

impl RemoteCommandResult {
    /// Build a result from captured bytes.
    pub fn from_output(exit_code: Option<i32>, captured: &[u8]) -> Self {
        let text = String::from_utf8_lossy(captured);
        Self {
            success: exit_code == Some(0),
            exit_code,
            output_lines: text.lines().map(str::to_string).collect(),
        }
    }
}

/// Executes newline-joined scripts on the remote host.
///
/// One call is one remote shell process. Implementations block until the
/// process exits; a non-zero exit is reported through
/// [`RemoteCommandResult::success`], not as an `Err`.
pub trait RemoteShell {
    fn run_remote(&self, commands: &[String]) -> SousResult<RemoteCommandResult>;
}
