use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use openday_bot::config::AppConfig;
use openday_bot::db;
use openday_bot::handlers;
use openday_bot::services::messaging::telegram::TelegramProvider;
use openday_bot::services::sessions::SessionStore;
use openday_bot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(!config.bot_token.is_empty(), "BOT_TOKEN must be set");

    let conn = db::init_db(&config.database_url)?;

    let telegram = TelegramProvider::new(config.bot_token.clone());
    if !config.public_base_url.is_empty() {
        let url = format!(
            "{}/webhook/telegram",
            config.public_base_url.trim_end_matches('/')
        );
        match telegram.set_webhook(&url, &config.webhook_secret).await {
            Ok(()) => tracing::info!(url = %url, "webhook registered"),
            Err(e) => tracing::warn!(error = %e, "failed to register webhook"),
        }
    }

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        chat: Box::new(telegram),
        sessions: SessionStore::default(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/webhook/telegram",
            post(handlers::webhook::telegram_webhook),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
