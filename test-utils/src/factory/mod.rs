//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a builder
//! for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let student = factory::create_student(&db).await?;
//!     let (teacher, course) = factory::helpers::create_course_with_teacher(&db).await?;
//!     factory::create_enrollment(&db, student.id, course.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Students and teachers
//! - `course` - Courses owned by a teacher
//! - `enrollment` - Student/course enrollment rows
//! - `admin` - Admin accounts
//! - `helpers` - ID generation, hashing and dependency helpers

pub mod admin;
pub mod course;
pub mod enrollment;
pub mod helpers;
pub mod user;

pub use admin::create_admin;
pub use course::create_course;
pub use enrollment::{create_enrollment, fill_course};
pub use user::{create_student, create_teacher};
