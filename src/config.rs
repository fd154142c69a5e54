use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub bot_token: String,
    /// Telegram chat id that receives new-booking notifications and may run
    /// /count and /export. 0 means unset: nobody is admin, notifications are
    /// skipped.
    pub admin_chat_id: i64,
    /// Externally reachable base URL; when set, the webhook is registered
    /// with Telegram on startup.
    pub public_base_url: String,
    pub webhook_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "bookings.db".to_string()),
            bot_token: env::var("BOT_TOKEN").unwrap_or_default(),
            admin_chat_id: env::var("ADMIN_CHAT_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_default(),
            webhook_secret: env::var("WEBHOOK_SECRET").unwrap_or_default(),
        }
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_chat_id != 0 && user_id == self.admin_chat_id
    }
}
