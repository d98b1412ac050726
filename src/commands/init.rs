use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use sous::application::InitOptions;
use sous::config::defaults;
use sous::infrastructure::process::first_missing_tool;
use sous::presentation::{create_init_use_case, Cli};
use sous::SousError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Tools a project cannot be scaffolded or deployed without.
const REQUIRED_TOOLS: &[&str] = &["chef", "rsync"];

/// `init <dir> [name]`. Needs no config file.
pub fn cmd_init(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    if let Some(tool) = first_missing_tool(REQUIRED_TOOLS) {
        return Err(SousError::tool_missing(tool).into());
    }

    let dir = cli
        .args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let dir = std::path::absolute(dir).map_err(SousError::from)?;
    let options = InitOptions::new(&dir).with_name(cli.args.get(1).cloned());
    let result = create_init_use_case(&dir, cli.json).execute(&options)?;

    if cli.json {
        crate::ui::json::write_event(
            out,
            &serde_json::json!({
                "event": "complete",
                "command": "init",
                "name": result.name,
                "written": result.written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
                "skipped": result.skipped.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            }),
        )?;
        return Ok(());
    }

    let caps = super::capabilities(cli);
    for path in &result.written {
        writeln!(
            out,
            "{} Created {}",
            Icon::Success.colored(caps.supports_color, caps.supports_unicode),
            path.display()
        )?;
    }
    for path in &result.skipped {
        writeln!(
            out,
            "{} {}",
            Icon::Warning.colored(caps.supports_color, caps.supports_unicode),
            ColoredText::warning(format!("Kept existing {}", path.display()))
                .render(caps.supports_color)
        )?;
    }
    writeln!(
        out,
        "\nNext: set `host` in {}, then run `sous bootstrap` and `sous deploy`.",
        dir.join(defaults::CONFIG_FILE).display()
    )?;
    Ok(())
}
