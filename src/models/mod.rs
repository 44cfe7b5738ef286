pub mod admission;
pub mod attendance;
pub mod course;
pub mod dashboard;
pub mod department;
pub mod event;
pub mod notice;
pub mod profile;
pub mod results;
