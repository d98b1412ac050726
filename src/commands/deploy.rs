use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use sous::application::DeployOptions;
use sous::domain::ports::DeployEventSink;
use sous::infrastructure::JsonEventSink;
use sous::presentation::{create_deploy_use_case, Cli};

use crate::ui::views::deploy::ConsoleEventSink;

/// Package, transfer and converge. Progress goes through the event sink.
pub fn cmd_deploy(cli: &Cli, _out: &mut dyn Write) -> Result<()> {
    let context = super::context(cli)?;
    let use_case = create_deploy_use_case(&context, cli.json)?;

    let events: Arc<dyn DeployEventSink> = if cli.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(super::capabilities(cli)))
    };

    use_case.execute_with_events(&context, &DeployOptions::from_context(&context), events)?;
    Ok(())
}
