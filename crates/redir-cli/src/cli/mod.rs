//! CLI for the redir redirect middleware.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_check, run_config_path, run_url};

/// Top-level CLI for redir.
#[derive(Debug, Parser)]
#[command(name = "redir")]
#[command(about = "redir: build CDN redirect URLs for stored objects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the redirect base URL comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Config file to read instead of ~/.config/redir/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Base URL overriding `[middleware.redirect] baseurl` from the config.
    #[arg(long, value_name = "URL")]
    pub baseurl: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the redirect URL for each object path.
    Url {
        #[command(flatten)]
        source: SourceArgs,
        /// Storage paths of the objects (leading `/` optional).
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Validate the redirect configuration and show the parsed base URL.
    Check {
        #[command(flatten)]
        source: SourceArgs,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the default config file.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Url { source, paths } => run_url(&source, &paths)?,
            CliCommand::Check { source, json } => run_check(&source, json)?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
