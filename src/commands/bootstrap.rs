use std::io::Write;

use anyhow::Result;
use sous::application::bootstrap_host;
use sous::presentation::{create_remote_shell, Cli};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

/// Install chef-client and friends on a fresh host.
pub fn cmd_bootstrap(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let context = super::context(cli)?;
    let shell = create_remote_shell(&context, cli.json)?;
    let caps = super::capabilities(cli);

    if !cli.json {
        let mut header = CommandHeader::new(Icon::Remote, "Sous Bootstrap");
        header.add("Host", context.destination()?);
        header.add(
            "Chef",
            context.chef_version.as_deref().unwrap_or("latest"),
        );
        write!(out, "{}", header.render(caps.supports_color, caps.supports_unicode))?;
        out.flush()?;
    }

    bootstrap_host(&shell, &context)?;

    if cli.json {
        crate::ui::json::write_event(
            out,
            &serde_json::json!({
                "event": "complete",
                "command": "bootstrap",
                "host": context.host,
            }),
        )?;
    } else {
        writeln!(
            out,
            "{} Host ready",
            Icon::Success.colored(caps.supports_color, caps.supports_unicode)
        )?;
    }
    Ok(())
}
