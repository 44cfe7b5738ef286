//! Route admission for the portal.
//!
//! `decide` is a pure function over the resolved session state and an
//! optional required role; `resolve` turns the cookie session plus a profile
//! lookup into that state. Keeping the decision separate from the IO makes
//! the admission rules directly testable.
//!
//! Rules:
//! - a session whose profile lookup did not complete is held at a blocking
//!   placeholder, never redirected;
//! - no authenticated user, or no profile row, redirects to the login page;
//! - an authenticated user in the wrong place (required role mismatch, or a
//!   role the portal does not recognize) is sent back to the dashboard
//!   landing page, not to login.

use actix_session::Session;
use actix_web::HttpResponse;
use rusqlite::Connection;

use crate::auth::session::get_user_id;
use crate::models::profile::{self, Profile, Role};

/// Session state as seen by the guard, resolved once per request.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// The profile lookup failed; admission cannot be decided yet.
    Unresolved,
    /// No authenticated user, or the user has no profile row.
    Anonymous,
    Authenticated(Profile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render a blocking placeholder; do not redirect.
    Wait,
    /// Redirect to the login page.
    ToLogin,
    /// Soft redirect to the dashboard landing page ("wrong place").
    ToDashboard,
    Allow,
}

/// Decide admission for a protected route. Pure; re-evaluated per request.
pub fn decide(state: &SessionState, required_role: Option<Role>) -> GuardDecision {
    match state {
        SessionState::Unresolved => GuardDecision::Wait,
        SessionState::Anonymous => GuardDecision::ToLogin,
        SessionState::Authenticated(profile) => match required_role {
            Some(required) if profile.role() != Some(required) => GuardDecision::ToDashboard,
            _ => GuardDecision::Allow,
        },
    }
}

/// Resolve the current session against the profile store.
///
/// A stored user id without a matching profile row counts as `Anonymous`
/// (the account is not admissible until its profile exists); a lookup error
/// leaves the state `Unresolved`.
pub fn resolve(session: &Session, conn: &Connection) -> SessionState {
    let Some(user_id) = get_user_id(session) else {
        return SessionState::Anonymous;
    };
    match profile::find_by_user_id(conn, user_id) {
        Ok(Some(p)) => SessionState::Authenticated(p),
        Ok(None) => SessionState::Anonymous,
        Err(e) => {
            log::error!("Profile lookup failed for user {user_id}: {e}");
            SessionState::Unresolved
        }
    }
}

/// Resolve and decide in one step. Returns the admitted profile, or the
/// response (placeholder or redirect) to send instead.
pub fn admit(
    session: &Session,
    conn: &Connection,
    required_role: Option<Role>,
) -> Result<Profile, HttpResponse> {
    let state = resolve(session, conn);
    match decide(&state, required_role) {
        GuardDecision::Allow => match state {
            SessionState::Authenticated(profile) => Ok(profile),
            // Allow is only ever produced for an authenticated state.
            _ => Err(see_other("/login")),
        },
        GuardDecision::Wait => Err(placeholder()),
        GuardDecision::ToLogin => Err(see_other("/login")),
        GuardDecision::ToDashboard => Err(see_other("/dashboard")),
    }
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// Blocking placeholder shown while the session cannot be resolved.
fn placeholder() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .insert_header(("Retry-After", "2"))
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../templates/errors/loading.html"))
}
