use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::{department, event};
use crate::templates_structs::{APP_NAME, IndexTemplate};

/// Public landing page: institutional copy plus the department list and
/// upcoming events read live from the store.
pub async fn index(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let departments = department::find_all(&conn).unwrap_or_else(|e| {
        log::error!("Department list failed: {e}");
        Vec::new()
    });
    let events = event::find_upcoming(&conn, &now, 6).unwrap_or_else(|e| {
        log::error!("Upcoming events failed: {e}");
        Vec::new()
    });

    render(IndexTemplate {
        app_name: APP_NAME,
        departments,
        events,
    })
}
