use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::errors::AppError;
use crate::models::Update;
use crate::services::intake;
use crate::state::AppState;

/// Telegram webhook endpoint. Authenticated requests always get 200:
/// per-update failures are logged and swallowed so one user's error never
/// triggers redelivery or affects other chats.
pub async fn telegram_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> Result<StatusCode, AppError> {
    // Shared-secret check (skip if unset — dev mode).
    if !state.config.webhook_secret.is_empty() {
        let provided = headers
            .get("x-telegram-bot-api-secret-token")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if provided != state.config.webhook_secret {
            tracing::warn!("webhook secret mismatch");
            return Err(AppError::Unauthorized);
        }
    }

    tracing::info!(update_id = update.update_id, "incoming update");

    if let Err(e) = intake::process_update(&state, update).await {
        tracing::error!(error = %e, "update processing failed");
    }

    Ok(StatusCode::OK)
}
