//! Project scaffolding
//!
//! Lays down `delivery.edn`, `Policyfile.rb` and `.gitignore`, then asks
//! the policy tool for a cookbook skeleton. Never overwrites a file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::domain::ports::PolicyTool;
use crate::error::{SousError, SousResult};

const COOKBOOKS_DIR: &str = "cookbooks";

const DELIVERY_TEMPLATE: &str = r#";; Sous delivery configuration.
;; Every key is optional; CLI flags take precedence over this file.
{
 ;; :host "203.0.113.10"
 ;; :port 22
 ;; :user "root"
 ;; :secrets "secrets.edn"
 ;; :remote-dir "/chef"
 ;; :run-list ["{name}::default"]
 ;; :attributes {:env "production"}
 }
"#;

const POLICYFILE_TEMPLATE: &str = r#"name '{name}'

default_source :supermarket

run_list '{name}::default'

cookbook '{name}', path: 'cookbooks/{name}'
"#;

const GITIGNORE_TEMPLATE: &str = "order-*\nsecrets.*\nPolicyfile.lock.json\n";

/// Options for `init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub dir: PathBuf,
    /// Policy and cookbook name; defaults to the directory name
    pub name: Option<String>,
}

impl InitOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Explicit name, else the final component of `dir`.
    pub fn resolved_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        std::path::absolute(&self.dir)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "site".to_string())
    }
}

/// Result of `init`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitResult {
    pub name: String,
    pub written: Vec<PathBuf>,
    /// Files left alone because they already existed
    pub skipped: Vec<PathBuf>,
}

pub struct InitUseCase<P: PolicyTool> {
    policy: P,
}

impl<P: PolicyTool> InitUseCase<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn execute(&self, options: &InitOptions) -> SousResult<InitResult> {
        let dir = &options.dir;
        let config = dir.join(defaults::CONFIG_FILE);
        if config.exists() {
            return Err(SousError::ProjectExists { path: config });
        }

        fs::create_dir_all(dir)?;
        let name = options.resolved_name();
        let mut result = InitResult {
            name: name.clone(),
            ..InitResult::default()
        };

        let files = [
            (config, render(DELIVERY_TEMPLATE, &name)),
            (dir.join(defaults::POLICYFILE), render(POLICYFILE_TEMPLATE, &name)),
            (dir.join(".gitignore"), GITIGNORE_TEMPLATE.to_string()),
        ];
        for (path, content) in files {
            if write_new(&path, &content)? {
                tracing::info!(path = %path.display(), "wrote project file");
                result.written.push(path);
            } else {
                tracing::info!(path = %path.display(), "kept existing file");
                result.skipped.push(path);
            }
        }

        let cookbooks = dir.join(COOKBOOKS_DIR);
        if cookbooks.join(&name).exists() {
            result.skipped.push(cookbooks.join(&name));
        } else {
            fs::create_dir_all(&cookbooks)?;
            self.policy.generate_cookbook(&cookbooks, &name)?;
            result.written.push(cookbooks.join(&name));
        }

        Ok(result)
    }
}

fn render(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

/// Returns `false` when the file already exists.
fn write_new(path: &Path, content: &str) -> io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}
