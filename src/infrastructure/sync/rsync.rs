//! Rsync Transfer Strategy
//!
//! Copies the staging directory to the remote directory in archive mode,
//! over ssh on the configured port. Nothing is ever deleted remotely.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::Context;
use crate::domain::ports::PayloadTransfer;
use crate::error::{SousError, SousResult};
use crate::infrastructure::process::run_status;

/// Transfer strategy using rsync
pub struct RsyncTransfer {
    destination: String,
    remote_dir: String,
    port: u16,
    quiet: bool,
}

impl RsyncTransfer {
    pub fn new(context: &Context) -> SousResult<Self> {
        Ok(Self {
            destination: context.destination()?,
            remote_dir: context.remote_dir.clone(),
            port: context.port,
            quiet: false,
        })
    }

    /// Suppress rsync's stdout (used with `--json`).
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn remote_dest(&self) -> String {
        format!("{}:{}", self.destination, self.remote_dir)
    }

    fn rsync_args(&self, local_dir: &Path) -> Vec<String> {
        vec![
            "-a".to_string(),
            "-e".to_string(),
            format!("ssh -p {}", self.port),
            // trailing slash = copy contents
            format!("{}/", local_dir.display()),
            self.remote_dest(),
        ]
    }
}

impl PayloadTransfer for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn destination(&self) -> String {
        self.remote_dest()
    }

    fn sync(&self, local_dir: &Path) -> SousResult<()> {
        let mut cmd = Command::new("rsync");
        cmd.args(self.rsync_args(local_dir))
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.quiet {
            cmd.stdout(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let status = run_status(&mut cmd)?;
        if !status.success() {
            return Err(SousError::TransferFailed {
                exit_code: status.code(),
            });
        }

        Ok(())
    }
}
