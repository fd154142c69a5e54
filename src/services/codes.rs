use chrono::Local;
use rand::Rng;
use rusqlite::Connection;

use crate::db::queries;

const MAX_ATTEMPTS: u32 = 10_000;

/// Draws random 4-digit codes until one is free in the store. On exhaustion
/// falls back to the current minute of day, which is not guaranteed unique;
/// the insert's unique index still catches that case.
pub fn generate_unique_code(conn: &Connection) -> anyhow::Result<String> {
    let mut rng = rand::thread_rng();
    for _ in 0..MAX_ATTEMPTS {
        let code = format!("{:04}", rng.gen_range(1..=9999));
        if !queries::code_exists(conn, &code)? {
            return Ok(code);
        }
    }

    tracing::warn!("code space exhausted, falling back to minute-of-day code");
    Ok(Local::now().format("%H%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::models::Booking;

    #[test]
    fn code_is_four_digits() {
        let conn = init_db(":memory:").unwrap();
        let code = generate_unique_code(&conn).unwrap();
        assert_eq!(code.len(), 4);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn avoids_existing_codes() {
        let conn = init_db(":memory:").unwrap();
        for i in 0..50 {
            let booking = Booking::new(
                format!("{:04}", i + 1),
                "Тест".to_string(),
                format!("+7999000{i:04}"),
                "3".to_string(),
            );
            queries::insert_booking(&conn, &booking).unwrap();
        }

        for _ in 0..20 {
            let code = generate_unique_code(&conn).unwrap();
            assert!(!queries::code_exists(&conn, &code).unwrap());
        }
    }
}
