//! Handler for the `serve` command.

use anyhow::Context;
use tracing::info;

use super::command::ServeArgs;
use super::load_config;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the serve command.
pub async fn execute(args: &ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.config)?;
    apply_overrides(&mut config, args);
    config.validate().context("invalid configuration")?;

    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "cognita starting");

    let chat = bootstrap::load_chat_service(&config)
        .await
        .context("failed to load model")?;
    bootstrap::run_server(&config, chat)
        .await
        .context("server error")?;
    Ok(())
}

/// Apply command-line overrides on top of file and environment settings.
pub fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(model_id) = &args.model_id {
        config.model.id.clone_from(model_id);
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
}
