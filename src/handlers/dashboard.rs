use actix_session::Session;
use actix_web::{HttpResponse, web};
use askama::Template;
use chrono::Utc;
use rusqlite::Connection;

use crate::auth::guard;
use crate::auth::session::set_flash;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::dashboard::{
    self, AdminStats, FacultyStats, StudentStats, load_admin_stats, load_faculty_stats,
    load_student_stats,
};
use crate::models::notice;
use crate::models::profile::{Profile, Role};
use crate::templates_structs::{
    APP_NAME, AccessDeniedTemplate, AdminDashboardTemplate, FacultyDashboardTemplate,
    PageContext, StudentDashboardTemplate,
};

const STATS_FAILED: &str = "Failed to load dashboard statistics";

fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Dispatch to the dashboard variant for the profile's role.
///
/// The match is exhaustive over the closed `Role` set; a stored role the
/// portal does not recognize gets the access-denied page, never a default
/// dashboard.
pub async fn index(pool: web::Data<DbPool>, session: Session) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let profile = match guard::admit(&session, &conn, None) {
        Ok(profile) => profile,
        Err(resp) => return Ok(resp),
    };

    match profile.role() {
        Some(Role::Admin) => render_admin(&conn, &session, &profile),
        Some(Role::Faculty) => render_faculty(&conn, &session, &profile),
        Some(Role::Student) => render_student(&conn, &session, &profile),
        None => {
            log::warn!(
                "Unrecognized role {:?} for user {} — denying access",
                profile.role,
                profile.user_id
            );
            let tmpl = AccessDeniedTemplate { app_name: APP_NAME };
            let body = tmpl.render()?;
            Ok(HttpResponse::Forbidden()
                .content_type("text/html; charset=utf-8")
                .body(body))
        }
    }
}

pub async fn admin(pool: web::Data<DbPool>, session: Session) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    match guard::admit(&session, &conn, Some(Role::Admin)) {
        Ok(profile) => render_admin(&conn, &session, &profile),
        Err(resp) => Ok(resp),
    }
}

pub async fn faculty(pool: web::Data<DbPool>, session: Session) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    match guard::admit(&session, &conn, Some(Role::Faculty)) {
        Ok(profile) => render_faculty(&conn, &session, &profile),
        Err(resp) => Ok(resp),
    }
}

pub async fn student(pool: web::Data<DbPool>, session: Session) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    match guard::admit(&session, &conn, Some(Role::Student)) {
        Ok(profile) => render_student(&conn, &session, &profile),
        Err(resp) => Ok(resp),
    }
}

fn render_admin(
    conn: &Connection,
    session: &Session,
    profile: &Profile,
) -> Result<HttpResponse, AppError> {
    let stats = match load_admin_stats(conn) {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("Admin stats failed: {e}");
            set_flash(session, STATS_FAILED);
            AdminStats::default()
        }
    };
    let ctx = PageContext::build(session, profile);
    render(AdminDashboardTemplate { ctx, stats })
}

fn render_faculty(
    conn: &Connection,
    session: &Session,
    profile: &Profile,
) -> Result<HttpResponse, AppError> {
    let stats = match load_faculty_stats(conn, profile.user_id, &now_stamp()) {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("Faculty stats failed for user {}: {e}", profile.user_id);
            set_flash(session, STATS_FAILED);
            FacultyStats::default()
        }
    };
    let ctx = PageContext::build(session, profile);
    render(FacultyDashboardTemplate { ctx, stats })
}

fn render_student(
    conn: &Connection,
    session: &Session,
    profile: &Profile,
) -> Result<HttpResponse, AppError> {
    let stats = match load_student_stats(conn, profile.user_id, &now_stamp()) {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("Student stats failed for user {}: {e}", profile.user_id);
            set_flash(session, STATS_FAILED);
            StudentStats::default()
        }
    };
    // A failed notices fetch degrades to an empty list, same flash treatment.
    let notices = match notice::find_recent_active(conn, dashboard::RECENT_NOTICES_LIMIT) {
        Ok(notices) => notices,
        Err(e) => {
            log::error!("Notices fetch failed: {e}");
            set_flash(session, STATS_FAILED);
            Vec::new()
        }
    };
    let ctx = PageContext::build(session, profile);
    render(StudentDashboardTemplate { ctx, stats, notices })
}
