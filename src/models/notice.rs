use rusqlite::{Connection, params};

/// Notice as shown on the student dashboard and the public site.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub publish_date: String,
}

fn row_to_notice(row: &rusqlite::Row) -> rusqlite::Result<Notice> {
    Ok(Notice {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        priority: row.get("priority")?,
        publish_date: row.get("publish_date")?,
    })
}

pub fn count_active(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM notices WHERE is_active = 1",
        [],
        |row| row.get(0),
    )
}

pub fn count_active_by_author(conn: &Connection, author_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM notices WHERE is_active = 1 AND author_id = ?1",
        params![author_id],
        |row| row.get(0),
    )
}

/// Most recently published active notices, newest first.
pub fn find_recent_active(conn: &Connection, limit: i64) -> rusqlite::Result<Vec<Notice>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, content, priority, publish_date \
         FROM notices WHERE is_active = 1 \
         ORDER BY publish_date DESC \
         LIMIT ?1",
    )?;
    let notices = stmt
        .query_map(params![limit], row_to_notice)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(notices)
}
