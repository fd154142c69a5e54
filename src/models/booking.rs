use chrono::Local;
use serde::{Deserialize, Serialize};

/// A confirmed signup. Immutable once written: the running bot never updates
/// or deletes rows, it only inserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// 4-character participant code shown to the user.
    pub code: String,
    pub parent: String,
    /// Canonical +7XXXXXXXXXX form; unique across all bookings.
    pub phone: String,
    pub child_age: String,
    pub created_at: String,
}

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

impl Booking {
    pub fn new(code: String, parent: String, phone: String, child_age: String) -> Self {
        Self {
            code,
            parent,
            phone,
            child_age,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }
}
