//! Staging directory ("order") lifecycle

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use crate::config::defaults;
use crate::domain::services::StageOutcome;
use crate::error::{SousError, SousResult};

/// Prefix of every staging directory created inside the project.
pub const STAGING_PREFIX: &str = "order-";

/// Exclusive owner of one deploy's staging directory.
///
/// Dropping the guard removes the directory, so an unwinding pipeline
/// never leaves one behind. [`StagingArea::close`] and
/// [`StagingArea::keep`] end the lifecycle explicitly.
#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    /// Create `order-XXXXXX` inside `project_dir`.
    pub fn create(project_dir: &Path) -> SousResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(project_dir)?;
        tracing::debug!(path = %dir.path().display(), "created staging directory");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the directory, reporting failure instead of ignoring it.
    pub fn close(self) -> SousResult<PathBuf> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|source| SousError::CleanupFailed {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    /// Leave the directory on disk and return its path.
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }
}

/// Write `payload` to `<dir>/attributes.json` unless the file already exists.
///
/// Non-object payloads are skipped; chef-client only accepts an object.
pub fn stage_attributes(dir: &Path, payload: &Value) -> io::Result<StageOutcome> {
    if !payload.is_object() {
        return Ok(StageOutcome::SkippedNotObject);
    }

    let path = dir.join(defaults::ATTRIBUTES_FILE);
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(StageOutcome::AlreadyPresent);
        }
        Err(e) => return Err(e),
    };

    serde_json::to_writer_pretty(&mut file, payload)?;
    file.write_all(b"\n")?;
    Ok(StageOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn staging_area_lives_in_project_dir_with_prefix() {
        let project = tempdir().unwrap();
        let staging = StagingArea::create(project.path()).unwrap();

        assert_eq!(staging.path().parent(), Some(project.path()));
        let name = staging.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("order-"));
        assert_eq!(name.len(), "order-".len() + 6);
    }

    #[test]
    fn staging_area_close_removes_directory() {
        let project = tempdir().unwrap();
        let staging = StagingArea::create(project.path()).unwrap();
        fs::write(staging.path().join("x"), "y").unwrap();

        let path = staging.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn staging_area_keep_leaves_directory() {
        let project = tempdir().unwrap();
        let staging = StagingArea::create(project.path()).unwrap();

        let path = staging.keep();
        assert!(path.is_dir());
    }

    #[test]
    fn staging_area_drop_removes_directory() {
        let project = tempdir().unwrap();
        let path = {
            let staging = StagingArea::create(project.path()).unwrap();
            staging.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn stage_attributes_writes_pretty_json() {
        let dir = tempdir().unwrap();
        let outcome = stage_attributes(dir.path(), &json!({"env": "prod"})).unwrap();

        assert_eq!(outcome, StageOutcome::Written);
        let content = fs::read_to_string(dir.path().join("attributes.json")).unwrap();
        assert_eq!(content, "{\n  \"env\": \"prod\"\n}\n");
    }

    #[test]
    fn stage_attributes_is_idempotent() {
        let dir = tempdir().unwrap();
        stage_attributes(dir.path(), &json!({"env": "prod"})).unwrap();
        let first = fs::read(dir.path().join("attributes.json")).unwrap();

        let outcome = stage_attributes(dir.path(), &json!({"env": "staging"})).unwrap();

        assert_eq!(outcome, StageOutcome::AlreadyPresent);
        assert_eq!(fs::read(dir.path().join("attributes.json")).unwrap(), first);
    }

    #[test]
    fn stage_attributes_skips_non_object() {
        let dir = tempdir().unwrap();
        let outcome = stage_attributes(dir.path(), &json!(["a"])).unwrap();

        assert_eq!(outcome, StageOutcome::SkippedNotObject);
        assert!(!dir.path().join("attributes.json").exists());
    }
}
