//! Sous CLI - converge a single host with Chef in local mode
//!
//! Usage: sous [OPTIONS] <VERB> [ARGS]...
//!
//! Verbs:
//!   init       Scaffold a project (delivery.edn, Policyfile.rb, cookbook)
//!   update     Re-lock the Policyfile
//!   bootstrap  Install chef-client on the host
//!   ssh        Print the ssh command for the host
//!   deploy     Package, transfer and converge

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sous::presentation::Cli;
use sous::SousError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod ui;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout();
    match commands::dispatch(&cli, &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<SousError>() {
            Some(sous_err) => {
                tracing::debug!(kind = sous_err.kind(), "command failed");
                ui::error::print_error(sous_err, cli.json);
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` wins over `-v`. Logs go to stderr, never stdout.
fn init_tracing(verbose: u8) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(7), "trace");
    }
}
