// Template context structures for Askama templates.

use actix_session::Session;
use askama::Template;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::models::dashboard::{AdminStats, FacultyStats, StudentStats};
use crate::models::department::DepartmentDisplay;
use crate::models::event::EventDisplay;
use crate::models::notice::Notice;
use crate::models::profile::Profile;

pub const APP_NAME: &str = "St. Xavier's College";

/// Common context shared by all portal pages.
/// Templates access these as `ctx.full_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub full_name: String,
    pub role_label: String,
    pub avatar_initial: String,
    pub flash: Option<String>,
    pub app_name: &'static str,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, profile: &Profile) -> Self {
        let role_label = profile
            .role()
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| profile.role.clone());
        let avatar_initial = profile
            .full_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        Self {
            full_name: profile.full_name.clone(),
            role_label,
            avatar_initial,
            flash: take_flash(session),
            app_name: APP_NAME,
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub app_name: &'static str,
    pub departments: Vec<DepartmentDisplay>,
    pub events: Vec<EventDisplay>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub app_name: &'static str,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "dashboard/admin.html")]
pub struct AdminDashboardTemplate {
    pub ctx: PageContext,
    pub stats: AdminStats,
}

#[derive(Template)]
#[template(path = "dashboard/faculty.html")]
pub struct FacultyDashboardTemplate {
    pub ctx: PageContext,
    pub stats: FacultyStats,
}

#[derive(Template)]
#[template(path = "dashboard/student.html")]
pub struct StudentDashboardTemplate {
    pub ctx: PageContext,
    pub stats: StudentStats,
    pub notices: Vec<Notice>,
}

#[derive(Template)]
#[template(path = "errors/access_denied.html")]
pub struct AccessDeniedTemplate {
    pub app_name: &'static str,
}
