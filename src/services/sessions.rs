use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::models::FormSession;

const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// In-memory intake sessions keyed by chat id. Sessions are created when a
/// user taps the signup button and cleared on confirm, cancel or restart;
/// a session idle longer than the TTL is treated as absent on next access.
pub struct SessionStore {
    inner: Mutex<HashMap<i64, FormSession>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn get(&self, chat_id: i64) -> Option<FormSession> {
        let mut sessions = self.inner.lock().unwrap();
        match sessions.get(&chat_id) {
            Some(s) if s.last_activity.elapsed() <= self.ttl => Some(s.clone()),
            Some(_) => {
                sessions.remove(&chat_id);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, chat_id: i64, mut session: FormSession) {
        session.last_activity = std::time::Instant::now();
        self.inner.lock().unwrap().insert(chat_id, session);
    }

    pub fn clear(&self, chat_id: i64) {
        self.inner.lock().unwrap().remove(&chat_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntakeState;

    #[test]
    fn lifecycle() {
        let store = SessionStore::default();
        assert!(store.get(1).is_none());

        store.put(1, FormSession::begin());
        let session = store.get(1).unwrap();
        assert_eq!(session.state, IntakeState::CollectingName);

        // Per-chat scoping
        assert!(store.get(2).is_none());

        store.clear(1);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn stale_session_is_absent() {
        let store = SessionStore::with_ttl(Duration::ZERO);
        store.put(1, FormSession::begin());
        std::thread::sleep(Duration::from_millis(5));
        assert!(store.get(1).is_none());
    }
}
