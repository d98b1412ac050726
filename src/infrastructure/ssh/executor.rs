//! SSH Remote Executor
//!
//! One `ssh` process per call. The script goes in on stdin, stdin is
//! closed, then combined output is streamed to the terminal and captured.

use std::io::{self, Read, Write};
use std::process::{Command, Stdio};

use crate::config::Context;
use crate::domain::ports::{RemoteCommandResult, RemoteShell};
use crate::error::SousResult;
use crate::infrastructure::process::{describe, spawn_error};

use super::tee::Tee;

/// Where live remote output is echoed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveOutput {
    /// The operator's terminal (default)
    #[default]
    Stdout,
    /// stderr, keeping stdout clean for JSON events
    Stderr,
}

/// Remote shell reached through the OpenSSH client
#[derive(Debug, Clone)]
pub struct SshExecutor {
    destination: String,
    port: u16,
    live: LiveOutput,
}

impl SshExecutor {
    /// Build an executor for the context's `user@host:port`.
    pub fn new(context: &Context) -> SousResult<Self> {
        Ok(Self {
            destination: context.destination()?,
            port: context.port,
            live: LiveOutput::default(),
        })
    }

    pub fn with_live_output(mut self, live: LiveOutput) -> Self {
        self.live = live;
        self
    }

    /// Arguments for a non-interactive `bash -s` session with agent forwarding.
    ///
    /// `2>&1` is applied by the remote shell so stderr interleaves with
    /// stdout in the order it was produced.
    fn ssh_args(&self) -> Vec<String> {
        vec![
            "-A".to_string(),
            "-p".to_string(),
            self.port.to_string(),
            self.destination.clone(),
            "bash -s 2>&1".to_string(),
        ]
    }

    fn script(commands: &[String]) -> String {
        let mut script = commands.join("\n");
        script.push('\n');
        script
    }
}

impl RemoteShell for SshExecutor {
    fn run_remote(&self, commands: &[String]) -> SousResult<RemoteCommandResult> {
        let mut cmd = Command::new("ssh");
        cmd.args(self.ssh_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        tracing::debug!(command = %describe(&cmd), lines = commands.len(), "running remote script");
        let mut child = cmd.spawn().map_err(|e| spawn_error("ssh", e))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A broken pipe here means ssh already gave up; its exit code says why.
            if let Err(e) = stdin.write_all(Self::script(commands).as_bytes()) {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
                tracing::debug!("ssh closed stdin before the script was written");
            }
        }

        let mut captured = Vec::new();
        if let Some(mut stdout) = child.stdout.take() {
            let mut live: Box<dyn Write> = match self.live {
                LiveOutput::Stdout => Box::new(io::stdout()),
                LiveOutput::Stderr => Box::new(io::stderr()),
            };
            let mut tee = Tee::new().with(&mut live).with(&mut captured);
            copy_chunks(&mut stdout, &mut tee)?;
        }

        let status = child.wait()?;
        let result = RemoteCommandResult::from_output(status.code(), &captured);
        tracing::debug!(
            exit_code = ?result.exit_code,
            lines = result.output_lines.len(),
            "remote script finished"
        );
        Ok(result)
    }
}

/// Pump `reader` into `writer` chunk by chunk, flushing after each so live
/// output is not held back by buffering.
fn copy_chunks(reader: &mut impl Read, writer: &mut impl Write) -> io::Result<u64> {
    let mut buf = [0u8; 8192];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        writer.flush()?;
        total += n as u64;
    }
    Ok(total)
}
