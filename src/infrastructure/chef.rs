//! Chef Workstation CLI adapter
//!
//! Implements [`PolicyTool`] by shelling out to `chef`. Every command runs
//! in the project directory with inherited stdio.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::ports::PolicyTool;
use crate::error::SousResult;
use crate::infrastructure::process::run_checked;

pub struct ChefCli {
    project_dir: PathBuf,
    quiet: bool,
}

impl ChefCli {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            quiet: false,
        }
    }

    /// Route chef's stdout to stderr (used with `--json`).
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn chef(&self, args: &[&str], step: &str) -> SousResult<()> {
        let mut cmd = Command::new("chef");
        cmd.args(args);
        if self.quiet {
            cmd.stdout(io::stderr());
        }
        run_checked(&mut cmd, &self.project_dir, step)
    }
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

impl PolicyTool for ChefCli {
    fn install(&self, policyfile: &Path) -> SousResult<()> {
        tracing::info!(policyfile = %policyfile.display(), "installing policy dependencies");
        self.chef(&["install", &path_arg(policyfile)], "chef install")
    }

    fn export(&self, policyfile: &Path, destination: &Path) -> SousResult<()> {
        tracing::info!(destination = %destination.display(), "exporting policy");
        self.chef(
            &[
                "export",
                &path_arg(policyfile),
                &path_arg(destination),
                "--force",
            ],
            "chef export",
        )
    }

    fn update(&self, policyfile: &Path) -> SousResult<()> {
        tracing::info!(policyfile = %policyfile.display(), "updating policy lock");
        self.chef(&["update", &path_arg(policyfile)], "chef update")
    }

    fn generate_cookbook(&self, cookbooks_dir: &Path, name: &str) -> SousResult<()> {
        let target = cookbooks_dir.join(name);
        self.chef(
            &["generate", "cookbook", &path_arg(&target)],
            "chef generate cookbook",
        )
    }
}
