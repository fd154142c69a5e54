use std::sync::Arc;

use crate::db::queries;
use crate::models::Booking;
use crate::state::AppState;
use crate::texts;

pub const EXPORT_FILENAME: &str = "bookings_export.csv";

// Non-admin callers get no reply at all, by design.

pub async fn count(state: &Arc<AppState>, chat_id: i64, from_id: i64) -> anyhow::Result<()> {
    if !state.config.is_admin(from_id) {
        tracing::info!(from_id, "ignoring /count from non-admin");
        return Ok(());
    }

    let total = {
        let db = state.db.lock().unwrap();
        queries::count_bookings(&db)?
    };
    state
        .chat
        .send_message(chat_id, &texts::total_count(total))
        .await
}

pub async fn export(state: &Arc<AppState>, chat_id: i64, from_id: i64) -> anyhow::Result<()> {
    if !state.config.is_admin(from_id) {
        tracing::info!(from_id, "ignoring /export from non-admin");
        return Ok(());
    }

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::export_all(&db)?
    };
    let content = to_csv(&bookings)?;

    state
        .chat
        .send_document(chat_id, EXPORT_FILENAME, content, texts::EXPORT_CAPTION)
        .await
}

fn to_csv(bookings: &[Booking]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["created_at", "code", "parent", "phone", "child_age"])?;
    for b in bookings {
        writer.write_record([&b.created_at, &b.code, &b.parent, &b.phone, &b.child_age])?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_rows() {
        let bookings = vec![
            Booking {
                code: "0002".to_string(),
                parent: "Анна Иванова".to_string(),
                phone: "+79992222222".to_string(),
                child_age: "4 года".to_string(),
                created_at: "2025-10-02 10:00:00 +0300".to_string(),
            },
            Booking {
                code: "0001".to_string(),
                parent: "Пётр Петров".to_string(),
                phone: "+79991111111".to_string(),
                child_age: "3 года".to_string(),
                created_at: "2025-10-01 10:00:00 +0300".to_string(),
            },
        ];

        let content = String::from_utf8(to_csv(&bookings).unwrap()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "created_at,code,parent,phone,child_age");
        assert!(lines[1].contains("0002"));
        assert!(lines[2].contains("0001"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_of_empty_store_is_header_only() {
        let content = String::from_utf8(to_csv(&[]).unwrap()).unwrap();
        assert_eq!(content.trim(), "created_at,code,parent,phone,child_age");
    }
}
