use std::time::Instant;

/// Where a user currently is in the intake dialogue. Idle has no variant:
/// an idle user simply has no session in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeState {
    CollectingName,
    CollectingPhone,
    CollectingAge,
    AwaitingConfirm,
}

impl IntakeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeState::CollectingName => "collecting_name",
            IntakeState::CollectingPhone => "collecting_phone",
            IntakeState::CollectingAge => "collecting_age",
            IntakeState::AwaitingConfirm => "awaiting_confirm",
        }
    }
}

/// Transient per-user form data, accumulated step by step and discarded on
/// confirm, cancel or restart.
#[derive(Debug, Clone)]
pub struct FormSession {
    pub state: IntakeState,
    pub parent: Option<String>,
    pub phone: Option<String>,
    pub child_age: Option<String>,
    pub last_activity: Instant,
}

impl FormSession {
    pub fn begin() -> Self {
        Self {
            state: IntakeState::CollectingName,
            parent: None,
            phone: None,
            child_age: None,
            last_activity: Instant::now(),
        }
    }
}
