use serde::{Deserialize, Serialize};

// Inbound wire types. Only the fields the bot reads are declared; serde
// ignores the rest of the Bot API payload.

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<TgMessage>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TgMessage {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<TgUser>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TgUser {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: TgUser,
    #[serde(default)]
    pub message: Option<TgMessage>,
    #[serde(default)]
    pub data: Option<String>,
}

// Outbound keyboard markup.

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboard {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineKeyboard {
    /// One button per row, the only layout this bot uses.
    pub fn rows(buttons: Vec<(&str, &str)>) -> Self {
        Self {
            inline_keyboard: buttons
                .into_iter()
                .map(|(text, data)| {
                    vec![InlineKeyboardButton {
                        text: text.to_string(),
                        callback_data: data.to_string(),
                    }]
                })
                .collect(),
        }
    }
}
