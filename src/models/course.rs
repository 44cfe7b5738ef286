use rusqlite::Connection;

/// Total courses on offer.
///
/// There is no course-to-faculty assignment or student enrollment relation
/// yet, so both the "assigned courses" and "enrolled courses" dashboard
/// cards fall back to this global count (see DESIGN.md).
pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))
}
