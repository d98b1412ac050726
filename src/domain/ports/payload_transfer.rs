//! Payload Transfer Port
//!
//! Copies a local directory's contents to the remote directory. One-way,
//! never deletes anything on the remote side.

use std::path::Path;

use crate::error::SousResult;

pub trait PayloadTransfer {
    /// Get the name of this transfer method (for logging)
    fn name(&self) -> &'static str;

    /// Display form of where the payload lands (`user@host:/dir`)
    fn destination(&self) -> String;

    /// Copy the contents of `local_dir` to the destination root.
    fn sync(&self, local_dir: &Path) -> SousResult<()>;
}
