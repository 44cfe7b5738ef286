use rusqlite::{Connection, params};

/// Results are only ever counted by the portal; marks and grades stay in
/// the store.
pub fn count_for_student(conn: &Connection, student_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM results WHERE student_id = ?1",
        params![student_id],
        |row| row.get(0),
    )
}
