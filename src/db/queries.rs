use rusqlite::{params, Connection};

use crate::models::Booking;

/// Inserts a new booking row. The UNIQUE constraints on phone and code are
/// the final arbiter against races that slip past the pre-insert checks;
/// use [`is_unique_violation`] to tell that apart from other failures.
pub fn insert_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO bookings (created_at, code, parent, phone, child_age)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            booking.created_at,
            booking.code,
            booking.parent,
            booking.phone,
            booking.child_age,
        ],
    )?;
    Ok(())
}

pub fn phone_exists(conn: &Connection, phone: &str) -> anyhow::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE phone = ?1",
        params![phone],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn code_exists(conn: &Connection, code: &str) -> anyhow::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE code = ?1",
        params![code],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn count_bookings(conn: &Connection) -> anyhow::Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))?;
    Ok(count)
}

/// All bookings, most recently created first, for the CSV export.
pub fn export_all(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT created_at, code, parent, phone, child_age
         FROM bookings ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Booking {
            created_at: row.get(0)?,
            code: row.get(1)?,
            parent: row.get(2)?,
            phone: row.get(3)?,
            child_age: row.get(4)?,
        })
    })?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row?);
    }
    Ok(bookings)
}

pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    fn booking(code: &str, phone: &str) -> Booking {
        Booking::new(
            code.to_string(),
            "Анна Иванова".to_string(),
            phone.to_string(),
            "3 года".to_string(),
        )
    }

    #[test]
    fn insert_and_lookup() {
        let conn = init_db(":memory:").unwrap();
        insert_booking(&conn, &booking("0042", "+79991234567")).unwrap();

        assert!(phone_exists(&conn, "+79991234567").unwrap());
        assert!(!phone_exists(&conn, "+79990000000").unwrap());
        assert!(code_exists(&conn, "0042").unwrap());
        assert!(!code_exists(&conn, "0001").unwrap());
        assert_eq!(count_bookings(&conn).unwrap(), 1);
    }

    #[test]
    fn duplicate_phone_is_unique_violation() {
        let conn = init_db(":memory:").unwrap();
        insert_booking(&conn, &booking("0001", "+79991234567")).unwrap();

        let err = insert_booking(&conn, &booking("0002", "+79991234567")).unwrap_err();
        assert!(is_unique_violation(&err));
        assert_eq!(count_bookings(&conn).unwrap(), 1);
    }

    #[test]
    fn duplicate_code_is_unique_violation() {
        let conn = init_db(":memory:").unwrap();
        insert_booking(&conn, &booking("0001", "+79991234567")).unwrap();

        let err = insert_booking(&conn, &booking("0001", "+79997654321")).unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn export_is_most_recent_first() {
        let conn = init_db(":memory:").unwrap();
        insert_booking(&conn, &booking("0001", "+79991111111")).unwrap();
        insert_booking(&conn, &booking("0002", "+79992222222")).unwrap();

        let all = export_all(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].code, "0002");
        assert_eq!(all[1].code, "0001");
    }

    #[test]
    fn init_is_idempotent() {
        let dir = std::env::temp_dir().join("openday-bot-test-init.db");
        let path = dir.to_str().unwrap();
        let _ = std::fs::remove_file(path);

        {
            let conn = init_db(path).unwrap();
            insert_booking(&conn, &booking("0001", "+79991234567")).unwrap();
        }
        let conn = init_db(path).unwrap();
        assert_eq!(count_bookings(&conn).unwrap(), 1);

        let _ = std::fs::remove_file(path);
    }
}
