use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
    pub teacher_id: String,
    pub remark: String,
    pub student_max_num: i32,
    pub hours: i32,
    pub start_date: DateTime<Utc>,
    pub semester: String,
    pub created_at: DateTime<Utc>,
}

/// A single course together with how many students are enrolled.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseDetailsDto {
    #[serde(flatten)]
    pub course: CourseDto,
    pub enrolled: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCourseDto {
    pub name: String,
    #[serde(default)]
    pub remark: String,
    pub student_max_num: i32,
    pub hours: i32,
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM` in the server's configured timezone
    pub start_date: String,
    /// `YYYY-1` or `YYYY-2`; derived from the start date when omitted
    pub semester: Option<String>,
}

/// Partial update; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateCourseDto {
    pub name: Option<String>,
    pub remark: Option<String>,
    pub student_max_num: Option<i32>,
    pub hours: Option<i32>,
    pub start_date: Option<String>,
    pub semester: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedCoursesDto {
    pub data: Vec<CourseDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// Query parameters of the public course listing.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct CourseListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    /// Substring of the course name
    pub name: Option<String>,
    /// Substring of the teacher's name
    pub teacher_name: Option<String>,
    /// Exact `id_card` of the teacher
    pub teacher_id: Option<String>,
}
