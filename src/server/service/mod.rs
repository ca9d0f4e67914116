//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Course lifecycle and enrollment eligibility rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Race Safety**: Seat taking, capacity changes and deletes end in one guarded write

pub mod admin;
pub mod auth;
pub mod course;
pub mod enrollment;

#[cfg(test)]
mod test;
