pub use super::admin::Entity as Admin;
pub use super::course::Entity as Course;
pub use super::enrollment::Entity as Enrollment;
pub use super::user::Entity as User;
