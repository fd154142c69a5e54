use std::sync::Arc;

use crate::db::queries;
use crate::models::{Booking, FormSession, InlineKeyboard, IntakeState, Update};
use crate::services::{codes, phone, reporting};
use crate::state::AppState;
use crate::texts;

/// Entry point for one inbound Telegram update. Dispatch is explicit: the
/// user's current session state selects the single handler for the event.
pub async fn process_update(state: &Arc<AppState>, update: Update) -> anyhow::Result<()> {
    if let Some(msg) = update.message {
        let chat_id = msg.chat.id;
        let from_id = msg.from.as_ref().map(|u| u.id).unwrap_or(chat_id);
        if let Some(text) = msg.text.as_deref() {
            handle_text(state, chat_id, from_id, text).await?;
        }
        return Ok(());
    }

    if let Some(cb) = update.callback_query {
        if let Err(e) = state.chat.answer_callback(&cb.id).await {
            tracing::debug!(error = %e, "failed to acknowledge callback query");
        }
        let chat_id = cb.message.as_ref().map(|m| m.chat.id).unwrap_or(cb.from.id);
        if let Some(data) = cb.data.as_deref() {
            handle_callback(state, chat_id, data).await?;
        }
    }

    Ok(())
}

async fn handle_text(
    state: &Arc<AppState>,
    chat_id: i64,
    from_id: i64,
    text: &str,
) -> anyhow::Result<()> {
    let trimmed = text.trim();

    if let Some(command) = command_name(trimmed) {
        return handle_command(state, chat_id, from_id, &command).await;
    }

    let Some(session) = state.sessions.get(chat_id) else {
        // Idle: the only free-text trigger is the start word.
        let lowered = trimmed.to_lowercase();
        if lowered == "start" || lowered == "старт" {
            send_welcome(state, chat_id).await?;
        }
        return Ok(());
    };

    tracing::debug!(chat_id, state = session.state.as_str(), "intake step");

    match session.state {
        IntakeState::CollectingName => on_name(state, chat_id, session, trimmed).await,
        IntakeState::CollectingPhone => on_phone(state, chat_id, session, trimmed).await,
        IntakeState::CollectingAge => on_age(state, chat_id, session, trimmed).await,
        // Confirm step only accepts the inline buttons.
        IntakeState::AwaitingConfirm => Ok(()),
    }
}

/// Extracts a leading bot command ("/start", "/count@SomeBot 5" → "count"),
/// or None for plain text.
fn command_name(text: &str) -> Option<String> {
    let first = text.split_whitespace().next()?;
    let command = first.strip_prefix('/')?;
    Some(command.split('@').next().unwrap_or(command).to_lowercase())
}

async fn handle_command(
    state: &Arc<AppState>,
    chat_id: i64,
    from_id: i64,
    command: &str,
) -> anyhow::Result<()> {
    match command {
        "ping" => state.chat.send_message(chat_id, texts::PONG).await,
        // Restart always wins: any partial session is discarded.
        "start" | "menu" => {
            state.sessions.clear(chat_id);
            send_welcome(state, chat_id).await
        }
        "count" => reporting::count(state, chat_id, from_id).await,
        "export" => reporting::export(state, chat_id, from_id).await,
        _ => Ok(()),
    }
}

async fn send_welcome(state: &Arc<AppState>, chat_id: i64) -> anyhow::Result<()> {
    let keyboard = InlineKeyboard::rows(vec![(texts::SIGNUP_BUTTON, "signup:start")]);
    state
        .chat
        .send_keyboard(chat_id, texts::WELCOME, &keyboard)
        .await
}

async fn on_name(
    state: &Arc<AppState>,
    chat_id: i64,
    mut session: FormSession,
    text: &str,
) -> anyhow::Result<()> {
    let name = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.chars().count() < 2 {
        return state.chat.send_message(chat_id, texts::BAD_NAME).await;
    }

    session.parent = Some(name);
    session.state = IntakeState::CollectingPhone;
    state.sessions.put(chat_id, session);
    state.chat.send_message(chat_id, texts::ASK_PHONE).await
}

async fn on_phone(
    state: &Arc<AppState>,
    chat_id: i64,
    mut session: FormSession,
    text: &str,
) -> anyhow::Result<()> {
    let Some(normalized) = phone::normalize(text) else {
        return state.chat.send_message(chat_id, texts::BAD_PHONE).await;
    };

    let taken = {
        let db = state.db.lock().unwrap();
        queries::phone_exists(&db, &normalized)?
    };
    if taken {
        // Stay on this step; the user may retry with another number.
        return state.chat.send_message(chat_id, texts::ALREADY_BOOKED).await;
    }

    session.phone = Some(normalized);
    session.state = IntakeState::CollectingAge;
    state.sessions.put(chat_id, session);
    state.chat.send_message(chat_id, texts::ASK_AGE).await
}

async fn on_age(
    state: &Arc<AppState>,
    chat_id: i64,
    mut session: FormSession,
    text: &str,
) -> anyhow::Result<()> {
    if text.is_empty() {
        return state.chat.send_message(chat_id, texts::BAD_AGE).await;
    }

    session.child_age = Some(text.to_string());
    session.state = IntakeState::AwaitingConfirm;

    let review = texts::review(
        session.parent.as_deref().unwrap_or(""),
        session.phone.as_deref().unwrap_or(""),
        session.child_age.as_deref().unwrap_or(""),
    );
    state.sessions.put(chat_id, session);

    let keyboard = InlineKeyboard::rows(vec![
        (texts::CONFIRM_BUTTON, "confirm:yes"),
        (texts::CANCEL_BUTTON, "confirm:no"),
    ]);
    state.chat.send_keyboard(chat_id, &review, &keyboard).await
}

async fn handle_callback(
    state: &Arc<AppState>,
    chat_id: i64,
    data: &str,
) -> anyhow::Result<()> {
    match data {
        "signup:start" => {
            // Begin starts a fresh form even if an older session lingers.
            state.sessions.put(chat_id, FormSession::begin());
            state.chat.send_message(chat_id, texts::ASK_NAME).await
        }
        "confirm:yes" | "confirm:no" => {
            let Some(session) = state.sessions.get(chat_id) else {
                return Ok(());
            };
            if session.state != IntakeState::AwaitingConfirm {
                return Ok(());
            }
            if data == "confirm:no" {
                state.sessions.clear(chat_id);
                return state.chat.send_message(chat_id, texts::CANCELLED).await;
            }
            finalize(state, chat_id, session).await
        }
        _ => Ok(()),
    }
}

/// Confirm action: generate a code, persist the booking, notify the admin.
/// Whatever happens, the session ends here so the user can restart cleanly.
async fn finalize(
    state: &Arc<AppState>,
    chat_id: i64,
    session: FormSession,
) -> anyhow::Result<()> {
    state.sessions.clear(chat_id);

    let (Some(parent), Some(phone), Some(child_age)) =
        (session.parent, session.phone, session.child_age)
    else {
        tracing::error!(chat_id, "confirm with incomplete session data");
        return state.chat.send_message(chat_id, texts::CONFIRM_FAILED).await;
    };

    let persisted = {
        let db = state.db.lock().unwrap();
        codes::generate_unique_code(&db).and_then(|code| {
            let booking = Booking::new(code, parent, phone, child_age);
            queries::insert_booking(&db, &booking).map(|_| booking)
        })
    };

    match persisted {
        Ok(booking) => {
            state
                .chat
                .send_message(chat_id, &texts::confirmed(&booking.code))
                .await?;
            notify_admin(state, &booking).await;
            Ok(())
        }
        Err(e) if queries::is_unique_violation(&e) => {
            // Lost the check-then-insert race; the constraint is the final
            // arbiter.
            tracing::warn!(chat_id, "booking conflict at insert time");
            state.chat.send_message(chat_id, texts::ALREADY_BOOKED).await
        }
        Err(e) => {
            tracing::error!(error = %e, chat_id, "failed to persist booking");
            state.chat.send_message(chat_id, texts::CONFIRM_FAILED).await
        }
    }
}

/// One attempt, result discarded: the admin ping must never fail or delay
/// the user's confirmation.
async fn notify_admin(state: &Arc<AppState>, booking: &Booking) {
    if state.config.admin_chat_id == 0 {
        tracing::warn!("ADMIN_CHAT_ID not configured, skipping notification");
        return;
    }

    let message = texts::admin_notification(
        &booking.code,
        &booking.parent,
        &booking.phone,
        &booking.child_age,
        &booking.created_at,
    );
    if let Err(e) = state
        .chat
        .send_message(state.config.admin_chat_id, &message)
        .await
    {
        tracing::error!(error = %e, "failed to notify admin");
    }
}
