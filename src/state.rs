use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::services::messaging::ChatProvider;
use crate::services::sessions::SessionStore;

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub chat: Box<dyn ChatProvider>,
    pub sessions: SessionStore,
}
