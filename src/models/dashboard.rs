//! Per-role dashboard statistics.
//!
//! Each role has a fixed battery of independent aggregate reads assembled
//! into one struct per request. The reads populate disjoint fields and have
//! no cross-query consistency requirement. All structs derive `Default` so
//! a failed battery degrades to zeros instead of taking the view down.

use rusqlite::Connection;

use crate::models::{admission, attendance, course, department, event, notice, profile, results};
use crate::models::profile::Role;

/// The student dashboard shows this many recent notices.
pub const RECENT_NOTICES_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct AdminStats {
    pub total_students: i64,
    pub total_faculty: i64,
    pub total_courses: i64,
    pub total_departments: i64,
    pub pending_admissions: i64,
    pub active_notices: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FacultyStats {
    pub assigned_courses: i64,
    pub total_students: i64,
    /// Not yet computed — attendance workflows are not implemented.
    /// Rendered as "not available", never as a made-up number.
    pub pending_attendance: Option<i64>,
    /// Not yet computed, same as `pending_attendance`.
    pub pending_results: Option<i64>,
    pub my_notices: i64,
    pub upcoming_events: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StudentStats {
    pub enrolled_courses: i64,
    pub attendance_percentage: i64,
    /// Not yet computed — assignment workflows are not implemented.
    /// Rendered as "not available", never as a made-up number.
    pub completed_assignments: Option<i64>,
    /// Not yet computed, same as `completed_assignments`.
    pub pending_assignments: Option<i64>,
    pub total_results: i64,
    pub upcoming_events: i64,
}

pub fn load_admin_stats(conn: &Connection) -> rusqlite::Result<AdminStats> {
    Ok(AdminStats {
        total_students: profile::count_by_role(conn, Role::Student)?,
        total_faculty: profile::count_by_role(conn, Role::Faculty)?,
        total_courses: course::count(conn)?,
        total_departments: department::count(conn)?,
        pending_admissions: admission::count_by_status(conn, "pending")?,
        active_notices: notice::count_active(conn)?,
    })
}

pub fn load_faculty_stats(
    conn: &Connection,
    faculty_user_id: i64,
    now: &str,
) -> rusqlite::Result<FacultyStats> {
    Ok(FacultyStats {
        // Global count until a course assignment relation exists.
        assigned_courses: course::count(conn)?,
        total_students: profile::count_by_role(conn, Role::Student)?,
        pending_attendance: None,
        pending_results: None,
        my_notices: notice::count_active_by_author(conn, faculty_user_id)?,
        upcoming_events: event::count_upcoming_by_organizer(conn, faculty_user_id, now)?,
    })
}

pub fn load_student_stats(
    conn: &Connection,
    student_user_id: i64,
    now: &str,
) -> rusqlite::Result<StudentStats> {
    let summary = attendance::summary_for_student(conn, student_user_id)?;
    Ok(StudentStats {
        // Global count until an enrollment relation exists.
        enrolled_courses: course::count(conn)?,
        attendance_percentage: summary.percentage(),
        completed_assignments: None,
        pending_assignments: None,
        total_results: results::count_for_student(conn, student_user_id)?,
        upcoming_events: event::count_upcoming(conn, now)?,
    })
}
