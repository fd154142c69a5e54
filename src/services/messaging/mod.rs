pub mod telegram;

use async_trait::async_trait;

use crate::models::InlineKeyboard;

#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()>;

    async fn send_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> anyhow::Result<()>;

    async fn send_document(
        &self,
        chat_id: i64,
        filename: &str,
        content: Vec<u8>,
        caption: &str,
    ) -> anyhow::Result<()>;

    async fn answer_callback(&self, callback_id: &str) -> anyhow::Result<()>;
}
