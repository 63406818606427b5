// src/models/mod.rs
pub mod assignment;
pub mod attendance;
pub mod student;
pub mod test;
