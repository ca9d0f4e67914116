use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct EnrollmentDto {
    pub student_id: String,
    pub course_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Roster entry; deliberately limited to identity and name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseStudentDto {
    pub id_card: String,
    pub name: String,
}
