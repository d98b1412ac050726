//! Prepare a fresh host for converging

use crate::config::Context;
use crate::domain::ports::RemoteShell;
use crate::domain::services::bootstrap_script;
use crate::error::{SousError, SousResult};

/// Install rsync, curl and chef-client on the host and create the remote
/// directory, all in one remote script.
pub fn bootstrap_host(remote: &impl RemoteShell, context: &Context) -> SousResult<()> {
    tracing::info!(
        host = ?context.host,
        chef_version = ?context.chef_version,
        "bootstrapping host"
    );
    let result = remote.run_remote(&bootstrap_script(context))?;
    if !result.success {
        return Err(SousError::from_remote_exit(result.exit_code));
    }
    Ok(())
}
