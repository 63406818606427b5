// src/web/mod.rs
pub mod attendance_handlers;
pub mod dashboard_handlers;
pub mod routes;
pub mod student_handlers;
pub mod test_handlers;
