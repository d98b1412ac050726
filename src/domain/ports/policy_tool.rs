//! Policy Tool Port
//!
//! The local Chef CLI operations the pipeline depends on. Every call blocks
//! until the tool exits; a non-zero exit is an error.

use std::path::Path;

use crate::error::SousResult;

pub trait PolicyTool {
    /// Resolve and lock cookbook dependencies for the policy.
    fn install(&self, policyfile: &Path) -> SousResult<()>;

    /// Export a self-contained bundle of the policy into `destination`.
    fn export(&self, policyfile: &Path, destination: &Path) -> SousResult<()>;

    /// Re-lock the policy against the latest matching cookbook versions.
    fn update(&self, policyfile: &Path) -> SousResult<()>;

    /// Scaffold a cookbook named `name` under `cookbooks_dir`.
    fn generate_cookbook(&self, cookbooks_dir: &Path, name: &str) -> SousResult<()>;
}
