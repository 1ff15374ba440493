#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use patient_trends::db::pool::DbPool;
use patient_trends::db::schema::ensure_schema;
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pt() -> Command {
    cargo_bin_cmd!("patient-trends")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_patient_trends.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// (user_id, birthday, gender, profession)
pub type UserRow<'a> = (i64, Option<&'a str>, Option<&'a str>, Option<&'a str>);
/// (user_id, reservation_date, start_time)
pub type ReservationRow<'a> = (i64, &'a str, &'a str);

pub fn insert_rows(conn: &Connection, users: &[UserRow], reservations: &[ReservationRow]) {
    ensure_schema(conn).expect("create schema");
    for (id, birthday, gender, profession) in users {
        conn.execute(
            "INSERT INTO user_master (user_id, user_name, birthday, gender, profession)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, format!("user{id}"), birthday, gender, profession],
        )
        .expect("insert user");
    }
    for (user_id, date, time) in reservations {
        conn.execute(
            "INSERT INTO reservation_records (user_id, clinic_id, device_id, reservation_date, start_time)
             VALUES (?1, 1, 1, ?2, ?3)",
            params![user_id, date, time],
        )
        .expect("insert reservation");
    }
}

/// In-memory database with the given rows.
pub fn memory_pool(users: &[UserRow], reservations: &[ReservationRow]) -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    insert_rows(&conn, users, reservations);
    DbPool { conn }
}

/// On-disk database with the given rows, for CLI tests.
pub fn file_db(name: &str, users: &[UserRow], reservations: &[ReservationRow]) -> String {
    let db_path = setup_test_db(name);
    let conn = Connection::open(&db_path).expect("open db");
    insert_rows(&conn, users, reservations);
    db_path
}

/// The three patients of the reference example, all with June 2024 visits.
pub fn example_users() -> Vec<UserRow<'static>> {
    vec![
        (1, Some("1990-03-15"), Some("F"), Some("Teacher")),
        (2, Some("1985-11-02"), Some("M"), Some("Teacher")),
        (3, Some("2000-06-01"), Some("F"), Some("Engineer")),
    ]
}

pub fn example_reservations() -> Vec<ReservationRow<'static>> {
    vec![
        (1, "2024-06-03", "09:00"),
        (1, "2024-06-17", "14:30"),
        (2, "2024-06-05", "11:15"),
        (3, "2024-06-20", "18:45"),
        (3, "2023-11-02", "10:00"),
        (2, "2024-07-01", "10:00"),
    ]
}
