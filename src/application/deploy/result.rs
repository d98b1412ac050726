//! Deploy Result

use std::path::PathBuf;

use crate::domain::services::StageOutcome;

/// Result of a successful deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    /// Staging directory used for this run
    pub staging_dir: PathBuf,
    /// Whether the staging directory was kept on disk
    pub retained: bool,
    /// What happened to `attributes.json`
    pub attributes: StageOutcome,
}
