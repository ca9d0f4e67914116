//! Request-level identity: typed session access and role guards.

pub mod auth;
pub mod session;
