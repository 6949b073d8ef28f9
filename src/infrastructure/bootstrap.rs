//! Process wiring: load the model once, then expose it.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use super::config::settings::Config;
use crate::adapter::inbound::http::{self, AppState};
use crate::adapter::outbound::candle::CandleChatModel;
use crate::application::ChatService;
use crate::error::Result;

/// Load the configured model and wrap it in a [`ChatService`].
///
/// Loading runs on the blocking pool since it may download weights.
///
/// # Errors
///
/// Returns an error if the model cannot be resolved or built.
pub async fn load_chat_service(config: &Config) -> Result<ChatService> {
    let model_config = config.model.clone();
    let generation = config.generation.clone();
    info!(
        model = %model_config.id,
        max_new_tokens = generation.max_new_tokens,
        do_sample = generation.do_sample,
        "Loading model. This may take a minute."
    );
    let model =
        tokio::task::spawn_blocking(move || CandleChatModel::load(&model_config, generation))
            .await??;
    Ok(ChatService::new(Arc::new(model)))
}

/// Bind the configured address and serve `chat` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or cannot be bound.
pub async fn run_server(config: &Config, chat: ChatService) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    let state = Arc::new(AppState::new(chat, config.server.body_limit_bytes));

    http::serve(listener, state, shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Cannot listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
