//! Shared test infrastructure for model-layer tests.
//!
//! `setup_test_db()` creates a temporary SQLite database with the full
//! schema applied. The insert helpers below build the small fixture graphs
//! the dashboard tests need (users with roles, courses, notices, events,
//! attendance rows).

#![allow(dead_code)]

use rusqlite::{Connection, params};
use tempfile::TempDir;

use collegegate::db::MIGRATIONS;

/// A password hash placeholder for fixtures that never log in.
pub const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$x";

/// Returns (TempDir, Connection); keep the TempDir alive for the
/// Connection to remain valid.
pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, conn)
}

/// Insert a user plus profile with the given role string; returns user_id.
pub fn create_user(conn: &Connection, username: &str, role: &str) -> i64 {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?1, ?2)",
        params![username, DUMMY_HASH],
    )
    .expect("Failed to insert user");
    let user_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO profiles (user_id, full_name, email, role) VALUES (?1, ?2, ?3, ?4)",
        params![
            user_id,
            format!("Test {username}"),
            format!("{username}@example.com"),
            role
        ],
    )
    .expect("Failed to insert profile");
    user_id
}

/// Insert a bare auth user without a profile row; returns user_id.
pub fn create_user_without_profile(conn: &Connection, username: &str) -> i64 {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?1, ?2)",
        params![username, DUMMY_HASH],
    )
    .expect("Failed to insert user");
    conn.last_insert_rowid()
}

pub fn create_department(conn: &Connection, name: &str, code: &str, dept_type: &str) -> i64 {
    conn.execute(
        "INSERT INTO departments (name, code, dept_type) VALUES (?1, ?2, ?3)",
        params![name, code, dept_type],
    )
    .expect("Failed to insert department");
    conn.last_insert_rowid()
}

pub fn create_course(conn: &Connection, name: &str, code: &str, department_id: i64) -> i64 {
    conn.execute(
        "INSERT INTO courses (name, code, department_id, credits, semester, year) \
         VALUES (?1, ?2, ?3, 4, 1, 1)",
        params![name, code, department_id],
    )
    .expect("Failed to insert course");
    conn.last_insert_rowid()
}

pub fn create_notice(
    conn: &Connection,
    title: &str,
    author_id: i64,
    is_active: bool,
    publish_date: &str,
) -> i64 {
    conn.execute(
        "INSERT INTO notices (title, content, priority, is_active, publish_date, author_id) \
         VALUES (?1, 'content', 'normal', ?2, ?3, ?4)",
        params![title, is_active, publish_date, author_id],
    )
    .expect("Failed to insert notice");
    conn.last_insert_rowid()
}

pub fn create_event(
    conn: &Connection,
    title: &str,
    organizer_id: i64,
    is_active: bool,
    event_date: &str,
) -> i64 {
    conn.execute(
        "INSERT INTO events (title, event_date, is_active, organizer_id) \
         VALUES (?1, ?2, ?3, ?4)",
        params![title, event_date, is_active, organizer_id],
    )
    .expect("Failed to insert event");
    conn.last_insert_rowid()
}

pub fn create_attendance(
    conn: &Connection,
    student_id: i64,
    course_id: i64,
    date: &str,
    is_present: bool,
    marked_by: i64,
) {
    conn.execute(
        "INSERT INTO attendance (student_id, course_id, date, is_present, marked_by) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![student_id, course_id, date, is_present, marked_by],
    )
    .expect("Failed to insert attendance");
}

pub fn create_result(conn: &Connection, student_id: i64, course_id: i64, published_by: i64) {
    conn.execute(
        "INSERT INTO results (student_id, course_id, exam_type, marks_obtained, total_marks, published_by) \
         VALUES (?1, ?2, 'midterm', 72, 100, ?3)",
        params![student_id, course_id, published_by],
    )
    .expect("Failed to insert result");
}

pub fn create_admission(conn: &Connection, applicant_name: &str, status: &str) {
    conn.execute(
        "INSERT INTO admissions (applicant_name, email, phone, date_of_birth, address, \
         department_preference, status) \
         VALUES (?1, 'a@example.com', '9000000000', '2005-01-01', 'Patna', 'science', ?2)",
        params![applicant_name, status],
    )
    .expect("Failed to insert admission");
}
