//! Handler for the `ask` command.

use anyhow::Context;

use super::command::AskArgs;
use super::load_config;
use crate::infrastructure::bootstrap;

/// Execute the ask command: one completion printed to stdout.
pub async fn execute(args: &AskArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.config)?;
    if let Some(model_id) = &args.model_id {
        config.model.id.clone_from(model_id);
    }
    if let Some(max_new_tokens) = args.max_new_tokens {
        config.generation.max_new_tokens = max_new_tokens;
    }
    config.logging.level.clone_from(&args.log_level);
    config.validate().context("invalid configuration")?;
    config.init_logging();

    let chat = bootstrap::load_chat_service(&config)
        .await
        .context("failed to load model")?;
    let completion = chat
        .reply(Some(args.message.as_str()))
        .await
        .context("generation failed")?;

    println!("{}", completion.text);
    Ok(())
}
