//! CLI Argument Parsing
//!
//! ## Design Notes
//!
//! - Every flag is global, so it may appear before or after the verb
//! - The verb is positional and resolved by the dispatcher, not by clap;
//!   an unknown verb prints usage instead of failing the parse

use std::path::PathBuf;

use clap::Parser;

use crate::config::{defaults, CliOverrides};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Sous - converge a single host with Chef in local mode
#[derive(Parser, Debug)]
#[command(name = "sous")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Verbs: init <dir> [name], update, bootstrap, ssh, deploy")]
pub struct Cli {
    /// Target host
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// SSH port
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Config file
    #[arg(short, long, global = true, default_value = defaults::CONFIG_FILE)]
    pub config: PathBuf,

    /// Secrets file (.edn, .toml, .json, .yaml)
    #[arg(short, long, global = true)]
    pub secrets: Option<String>,

    /// Comma-delimited run-list override
    #[arg(short, long, global = true, value_delimiter = ',')]
    pub run_list: Option<Vec<String>>,

    /// Directory on the host the payload is copied into
    #[arg(short = 'd', long, global = true)]
    pub remote_dir: Option<String>,

    /// Keep the local staging directory after deploy
    #[arg(short, long, global = true)]
    pub keep_order: bool,

    /// Remote user
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// chef-client version installed by bootstrap
    #[arg(long, global = true)]
    pub chef_version: Option<String>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// init | update | bootstrap | ssh | deploy
    pub verb: Option<String>,

    /// Verb arguments
    pub args: Vec<String>,
}

impl Cli {
    /// The subset of flags that override config file values.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            secrets: self.secrets.clone(),
            remote_dir: self.remote_dir.clone(),
            run_list: self.run_list.clone(),
            keep_order: self.keep_order,
            chef_version: self.chef_version.clone(),
        }
    }
}
