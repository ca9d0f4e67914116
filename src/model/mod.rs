//! Request and response DTOs exchanged over the HTTP API.

pub mod admin;
pub mod api;
pub mod course;
pub mod enrollment;
pub mod user;
