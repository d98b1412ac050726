use std::io::Write;

use anyhow::Result;
use sous::domain::services::ssh_command_line;
use sous::presentation::Cli;
use sous::SousError;

/// Print the interactive ssh invocation for the configured host.
pub fn cmd_ssh(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let context = super::context(cli)?;
    let line = ssh_command_line(&context).ok_or(SousError::HostMissing)?;

    if cli.json {
        crate::ui::json::write_event(
            out,
            &serde_json::json!({
                "event": "ssh",
                "command_line": line,
            }),
        )?;
    } else {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
