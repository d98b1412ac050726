use std::io::Write;

use anyhow::Result;
use sous::application::update_policy;
use sous::infrastructure::ChefCli;
use sous::presentation::Cli;

use crate::ui::primitives::icon::Icon;

pub fn cmd_update(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let context = super::context(cli)?;
    update_policy(
        &ChefCli::new(&context.project_dir).with_quiet(cli.json),
        &context,
    )?;

    if cli.json {
        crate::ui::json::write_event(
            out,
            &serde_json::json!({
                "event": "complete",
                "command": "update",
                "policyfile": context.policyfile().display().to_string(),
            }),
        )?;
    } else {
        let caps = super::capabilities(cli);
        writeln!(
            out,
            "{} Updated {}",
            Icon::Success.colored(caps.supports_color, caps.supports_unicode),
            context.policyfile().display()
        )?;
    }
    Ok(())
}
