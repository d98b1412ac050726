//! Local process helpers
//!
//! Spawning is the one place a missing binary is detected, so every
//! external tool goes through here to get a uniform `ToolMissing`.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{SousError, SousResult};

/// Check if `program` is installed and can be spawned
pub fn tool_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// First tool in `programs` that cannot be spawned.
pub fn first_missing_tool<'a>(programs: &[&'a str]) -> Option<&'a str> {
    programs.iter().copied().find(|p| !tool_available(p))
}

/// Map a spawn error for `program` into the error taxonomy.
pub fn spawn_error(program: &str, err: io::Error) -> SousError {
    if err.kind() == io::ErrorKind::NotFound {
        SousError::tool_missing(program)
    } else {
        SousError::Io(err)
    }
}

/// Describe a command line for logs.
pub fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().to_string()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().to_string()));
    parts.join(" ")
}

/// Run `cmd` to completion with inherited stdio and return its status.
pub fn run_status(cmd: &mut Command) -> SousResult<ExitStatus> {
    let program = cmd.get_program().to_string_lossy().to_string();
    tracing::debug!(command = %describe(cmd), "spawning");
    cmd.status().map_err(|e| spawn_error(&program, e))
}

/// Run `cmd` in `cwd`, failing with `PackageFailed` on a non-zero exit.
pub fn run_checked(cmd: &mut Command, cwd: &Path, step: &str) -> SousResult<()> {
    cmd.current_dir(cwd);
    let status = run_status(cmd)?;
    if status.success() {
        Ok(())
    } else {
        Err(SousError::PackageFailed {
            step: step.to_string(),
            exit_code: status.code(),
        })
    }
}
