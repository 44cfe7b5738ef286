use rusqlite::{Connection, params};

pub fn count_by_status(conn: &Connection, status: &str) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM admissions WHERE status = ?1",
        params![status],
        |row| row.get(0),
    )
}
