//! HTTP request handlers.
//!
//! Handlers resolve the caller through `AuthGuard`, convert DTOs into domain params,
//! call one service, and convert the result back into a DTO.

pub mod admin;
pub mod auth;
pub mod course;
pub mod enrollment;
