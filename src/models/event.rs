use rusqlite::{Connection, params};

/// Upcoming event for the public events section.
#[derive(Debug, Clone)]
pub struct EventDisplay {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub location: String,
}

/// Active events dated at or after `now` (ISO-8601 `YYYY-MM-DD HH:MM:SS`,
/// which compares correctly as text).
pub fn count_upcoming(conn: &Connection, now: &str) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM events WHERE is_active = 1 AND event_date >= ?1",
        params![now],
        |row| row.get(0),
    )
}

/// Active future events organized by the given user.
pub fn count_upcoming_by_organizer(
    conn: &Connection,
    organizer_id: i64,
    now: &str,
) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM events \
         WHERE is_active = 1 AND organizer_id = ?1 AND event_date >= ?2",
        params![organizer_id, now],
        |row| row.get(0),
    )
}

pub fn find_upcoming(conn: &Connection, now: &str, limit: i64) -> rusqlite::Result<Vec<EventDisplay>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, COALESCE(description, '') AS description, event_date, \
                COALESCE(location, '') AS location \
         FROM events WHERE is_active = 1 AND event_date >= ?1 \
         ORDER BY event_date ASC \
         LIMIT ?2",
    )?;
    let events = stmt
        .query_map(params![now, limit], |row| {
            Ok(EventDisplay {
                id: row.get("id")?,
                title: row.get("title")?,
                description: row.get("description")?,
                event_date: row.get("event_date")?,
                location: row.get("location")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}
