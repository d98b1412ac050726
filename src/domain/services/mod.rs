//! Domain Services
//!
//! Pure business logic: payload assembly, log scanning, script building.
//! These services have no I/O dependencies and are easily testable.

mod attributes;
mod failure_scan;
mod scripts;

pub use attributes::{merge_attributes, StageOutcome, SECRETS_KEY};
pub use failure_scan::find_stacktrace_path;
pub use scripts::{
    bootstrap_script, cat_script, converge_script, shell_quote, ssh_command_line,
    CHEF_INSTALL_URL,
};
