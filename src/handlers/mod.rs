pub mod auth_handlers;
pub mod dashboard;
pub mod public;
