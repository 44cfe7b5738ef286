use rusqlite::Connection;

/// Department row for the public departments section.
#[derive(Debug, Clone)]
pub struct DepartmentDisplay {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub dept_type: String,
    pub hod_name: String,
    pub description: String,
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<DepartmentDisplay>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, code, dept_type, \
                COALESCE(hod_name, '') AS hod_name, \
                COALESCE(description, '') AS description \
         FROM departments ORDER BY name",
    )?;
    let departments = stmt
        .query_map([], |row| {
            Ok(DepartmentDisplay {
                id: row.get("id")?,
                name: row.get("name")?,
                code: row.get("code")?,
                dept_type: row.get("dept_type")?,
                hod_name: row.get("hod_name")?,
                description: row.get("description")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(departments)
}
