//! Test environment builder for isolated Sous testing.
//!
//! Every run gets a fresh project directory and a private `bin/` that is
//! placed first on PATH, so fake `chef`, `rsync` and `ssh` scripts stand in
//! for the real tools. Shims append what they saw to files under `log/`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Sous CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Whether the system directories are appended to the private PATH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemPath {
    /// `bin/` then `/usr/bin:/bin`; shims can use coreutils
    Include,
    /// `bin/` only; anything not shimmed is missing
    Exclude,
}

pub struct TestEnv {
    root: TempDir,
    system_path: SystemPath,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.path().join("project")
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_dir().join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.project_path("delivery.edn")
    }

    fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.path().join("log")
    }

    /// Contents of a shim log, empty if the shim never ran.
    pub fn read_log(&self, name: &str) -> String {
        fs::read_to_string(self.log_dir().join(name)).unwrap_or_default()
    }

    /// `order-*` directories currently in the project.
    pub fn staging_dirs(&self) -> Vec<PathBuf> {
        fs::read_dir(self.project_dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.is_dir()
                    && p.file_name()
                        .unwrap()
                        .to_string_lossy()
                        .starts_with("order-")
            })
            .collect()
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Run sous from the project directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(&self.project_dir(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let path = match self.system_path {
            SystemPath::Include => format!("{}:/usr/bin:/bin", self.bin_dir().display()),
            SystemPath::Exclude => self.bin_dir().display().to_string(),
        };

        let output = Command::new(env!("CARGO_BIN_EXE_sous"))
            .current_dir(cwd)
            .args(args)
            .env("PATH", path)
            .env("SOUS_TEST_LOG", self.log_dir())
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute sous");

        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    config: Option<String>,
    tools: Vec<(String, String)>,
    files: Vec<(String, String)>,
    system_path: SystemPath,
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self {
            config: None,
            tools: Vec::new(),
            files: Vec::new(),
            system_path: SystemPath::Include,
        }
    }
}

impl TestEnvBuilder {
    /// Write `delivery.edn` with this content.
    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    /// Install an executable script named `name` on the private PATH.
    pub fn with_tool(mut self, name: &str, script: &str) -> Self {
        self.tools.push((name.to_string(), script.to_string()));
        self
    }

    pub fn with_project_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn without_system_path(mut self) -> Self {
        self.system_path = SystemPath::Exclude;
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            system_path: self.system_path,
        };
        fs::create_dir_all(env.project_dir()).unwrap();
        fs::create_dir_all(env.bin_dir()).unwrap();
        fs::create_dir_all(env.log_dir()).unwrap();

        if let Some(config) = &self.config {
            env.write_project_file("delivery.edn", config);
        }
        for (relative, content) in &self.files {
            env.write_project_file(relative, content);
        }
        for (name, script) in &self.tools {
            install_tool(&env.bin_dir().join(name), script);
        }
        env
    }
}

#[cfg(unix)]
fn install_tool(path: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, script).expect("Failed to write tool shim");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark tool shim executable");
}

#[cfg(not(unix))]
fn install_tool(_path: &Path, _script: &str) {
    panic!("tool shims require a unix shell");
}
