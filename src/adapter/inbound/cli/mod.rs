//! Command-line entry points.

pub mod ask;
pub mod command;
pub mod config;
pub mod serve;

use anyhow::Context;

use self::command::{Cli, Commands, ConfigCommand, ConfigPathArg};
use crate::infrastructure::config::settings::Config;

/// Run the parsed command line.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Ask(args) => ask::execute(&args).await,
        Commands::Config(ConfigCommand::Show(args)) => config::show(&args),
        Commands::Config(ConfigCommand::Validate(args)) => config::validate(&args),
    }
}

fn load_config(args: &ConfigPathArg) -> anyhow::Result<Config> {
    Config::resolve(args.config.as_deref()).context("failed to load configuration")
}
