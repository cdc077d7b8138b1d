use axum::{
    routing::{get, post},
    Router,
};
use reqwest::Client;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{
    config::Config,
    handlers::{get_logs, get_sensors, health, post_chat},
    services::{ChatClient, LogClient},
};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub logs: LogClient,
    pub chat: ChatClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        // No timeout override: the client defaults apply to both upstreams.
        let http = Client::builder().build()?;
        Ok(Self {
            logs: LogClient::new(http.clone(), config.log_endpoint()),
            chat: ChatClient::new(
                http,
                config.chat_endpoint(),
                config.openai_api_key.clone(),
                config.chat_model.clone(),
                config.chat_temperature,
            ),
        })
    }
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/sensors", get(get_sensors))
        .route("/api/logs", get(get_logs))
        .route("/api/chat", post(post_chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes plus the compiled frontend served from `static_dir`.
pub fn router(state: AppState, config: &Config) -> Router {
    api_routes(state).fallback_service(ServeDir::new(config.static_dir()))
}
