use rusqlite::{Connection, params};

/// Present/total attendance rows for one student.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceSummary {
    pub present: i64,
    pub total: i64,
}

impl AttendanceSummary {
    /// Attendance as a rounded integer percentage. Zero rows means 0%, not
    /// a division error.
    pub fn percentage(&self) -> i64 {
        percentage(self.present, self.total)
    }
}

pub fn percentage(present: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((present as f64 / total as f64) * 100.0).round() as i64
}

pub fn summary_for_student(conn: &Connection, student_id: i64) -> rusqlite::Result<AttendanceSummary> {
    conn.query_row(
        "SELECT COALESCE(SUM(is_present), 0), COUNT(*) \
         FROM attendance WHERE student_id = ?1",
        params![student_id],
        |row| {
            Ok(AttendanceSummary {
                present: row.get(0)?,
                total: row.get(1)?,
            })
        },
    )
}
