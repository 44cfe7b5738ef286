pub mod csrf;
pub mod guard;
pub mod middleware;
pub mod password;
pub mod session;
