//! Minimal schema for the two tables the reports read.
//!
//! The reservation database is normally produced by another system; this
//! only lets `init` create an empty one with compatible tables.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Create `user_master` and `reservation_records` if they are missing.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS user_master (
            user_id        INTEGER PRIMARY KEY,
            user_name      TEXT,
            login_id       TEXT,
            password       TEXT,
            register_date  DATE,
            birthday       DATE,
            gender         TEXT,
            postcode       TEXT,
            address_pref   TEXT,
            address_town   TEXT,
            address_detail TEXT,
            email          TEXT,
            tel            TEXT,
            profession     TEXT
        );

        CREATE TABLE IF NOT EXISTS reservation_records (
            reserve_id         INTEGER PRIMARY KEY,
            user_id            INTEGER REFERENCES user_master(user_id),
            clinic_id          INTEGER,
            device_id          INTEGER,
            reservation_date   DATE,
            start_time         TEXT,
            rental_duration    TEXT,
            payment            INTEGER,
            after_service      INTEGER,
            evaluation_service INTEGER,
            evaluation_device  INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_reservation_user ON reservation_records(user_id);
        CREATE INDEX IF NOT EXISTS idx_reservation_date ON reservation_records(reservation_date);
        "#,
    )?;
    Ok(())
}

/// Check that both tables exist before running a report.
pub fn has_reporting_tables(conn: &Connection) -> AppResult<bool> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master
         WHERE type = 'table' AND name IN ('user_master', 'reservation_records')",
        [],
        |row| row.get(0),
    )?;
    Ok(n == 2)
}
