pub mod prelude;

pub mod admin;
pub mod course;
pub mod enrollment;
pub mod user;
