use anyhow::Context;
use async_trait::async_trait;

use super::ChatProvider;
use crate::models::InlineKeyboard;

pub struct TelegramProvider {
    token: String,
    client: reqwest::Client,
}

impl TelegramProvider {
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.token, method)
    }

    async fn call(&self, method: &str, payload: serde_json::Value) -> anyhow::Result<()> {
        self.client
            .post(self.api_url(method))
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("failed to call Telegram {method}"))?
            .error_for_status()
            .with_context(|| format!("Telegram {method} returned error"))?;
        Ok(())
    }

    /// Registers the webhook target with Telegram. Called once on startup
    /// when a public base URL is configured.
    pub async fn set_webhook(&self, url: &str, secret: &str) -> anyhow::Result<()> {
        let mut payload = serde_json::json!({ "url": url });
        if !secret.is_empty() {
            payload["secret_token"] = serde_json::json!(secret);
        }
        self.call("setWebhook", payload).await
    }
}

#[async_trait]
impl ChatProvider for TelegramProvider {
    async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()> {
        self.call(
            "sendMessage",
            serde_json::json!({ "chat_id": chat_id, "text": text }),
        )
        .await
    }

    async fn send_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> anyhow::Result<()> {
        self.call(
            "sendMessage",
            serde_json::json!({
                "chat_id": chat_id,
                "text": text,
                "reply_markup": keyboard,
            }),
        )
        .await
    }

    async fn send_document(
        &self,
        chat_id: i64,
        filename: &str,
        content: Vec<u8>,
        caption: &str,
    ) -> anyhow::Result<()> {
        let part = reqwest::multipart::Part::bytes(content)
            .file_name(filename.to_string())
            .mime_str("text/csv")
            .context("invalid document mime type")?;
        let form = reqwest::multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .part("document", part);

        self.client
            .post(self.api_url("sendDocument"))
            .multipart(form)
            .send()
            .await
            .context("failed to call Telegram sendDocument")?
            .error_for_status()
            .context("Telegram sendDocument returned error")?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> anyhow::Result<()> {
        self.call(
            "answerCallbackQuery",
            serde_json::json!({ "callback_query_id": callback_id }),
        )
        .await
    }
}
