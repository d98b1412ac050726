//! Verb dispatch
//!
//! The verb set is closed. Each verb maps to exactly one handler through
//! [`HANDLERS`]; anything else prints usage and does nothing.

mod bootstrap;
mod deploy;
mod init;
mod ssh;
mod update;

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use sous::config::{resolve, Context};
use sous::presentation::Cli;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Init,
    Update,
    Bootstrap,
    Ssh,
    Deploy,
}

impl Verb {
    pub fn parse(s: &str) -> Option<Self> {
        HANDLERS
            .iter()
            .map(|(verb, _)| *verb)
            .find(|verb| verb.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Update => "update",
            Self::Bootstrap => "bootstrap",
            Self::Ssh => "ssh",
            Self::Deploy => "deploy",
        }
    }
}

type Handler = fn(&Cli, &mut dyn Write) -> Result<()>;

const HANDLERS: &[(Verb, Handler)] = &[
    (Verb::Init, init::cmd_init),
    (Verb::Update, update::cmd_update),
    (Verb::Bootstrap, bootstrap::cmd_bootstrap),
    (Verb::Ssh, ssh::cmd_ssh),
    (Verb::Deploy, deploy::cmd_deploy),
];

fn handler(verb: Verb) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(v, _)| *v == verb)
        .map(|(_, handler)| *handler)
}

/// Run the verb named on the command line, writing human output to `out`.
pub fn dispatch(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let verb = cli.verb.as_deref().and_then(Verb::parse);
    match verb.and_then(handler) {
        Some(run) => {
            tracing::debug!(verb = verb.map(|v| v.as_str()), "dispatching");
            run(cli, out)
        }
        None => {
            if let Some(unknown) = &cli.verb {
                tracing::debug!(verb = %unknown, "unknown verb");
            }
            write_usage(out)
        }
    }
}

pub fn write_usage(out: &mut dyn Write) -> Result<()> {
    let mut command = Cli::command();
    write!(out, "{}", command.render_help())?;
    out.flush()?;
    Ok(())
}

/// Resolve the Context every verb except `init` runs against.
fn context(cli: &Cli) -> Result<Context> {
    Ok(resolve(&cli.config, cli.overrides())?)
}

fn capabilities(cli: &Cli) -> TerminalCapabilities {
    detect_capabilities().with_color_mode(cli.color)
}
