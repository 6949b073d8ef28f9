//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Chat with a local language model over HTTP
#[derive(Parser, Debug)]
#[command(name = "cognita")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the cognita CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the model and serve the chat API
    Serve(ServeArgs),

    /// Answer a single message and exit
    Ask(AskArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `cognita config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file.
    Validate(ConfigPathArg),
}

/// Config file argument shared by commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigPathArg {
    /// Path to the configuration file [default: ~/.cognita/config.toml if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `cognita serve`.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Override the bind address.
    #[arg(long)]
    pub host: Option<String>,

    /// Override the port.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the hub model id.
    #[arg(long)]
    pub model_id: Option<String>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `cognita ask`.
#[derive(Args, Debug, Clone, Default)]
pub struct AskArgs {
    /// Message to send to the model.
    pub message: String,

    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Override the hub model id.
    #[arg(long)]
    pub model_id: Option<String>,

    /// Override the maximum number of generated tokens.
    #[arg(long)]
    pub max_new_tokens: Option<usize>,

    /// Override log level (debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
