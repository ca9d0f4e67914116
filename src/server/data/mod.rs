//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository borrows a `ConnectionTrait`, so the same code runs against the pool or
//! inside a transaction.

pub mod admin;
pub mod course;
pub mod enrollment;
pub mod user;
