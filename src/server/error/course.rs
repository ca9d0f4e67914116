use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, semester::SemesterError};

/// Course lifecycle rule violations.
#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Caller identity is missing")]
    Unauthorized,

    #[error("Teacher not found")]
    TeacherNotFound,

    #[error("Start date must be formatted as YYYY-MM-DD or YYYY-MM-DD HH:MM")]
    InvalidDateFormat,

    #[error("Start date must be in the future")]
    PastStartDate,

    #[error(transparent)]
    InvalidSemester(#[from] SemesterError),

    /// A required field is empty or a numeric field is not positive.
    #[error("Invalid {0}")]
    InvalidField(&'static str),

    /// Missing, or owned by someone other than the caller.
    #[error("Course not found")]
    CourseNotFound,

    #[error("Course has enrolled students and cannot be deleted")]
    CourseHasStudents,

    #[error("Course has already started")]
    CourseStarted,

    #[error(
        "Student limit {requested} is below the {enrolled} students already enrolled"
    )]
    InvalidStudentNum { requested: i32, enrolled: u64 },
}

/// # Returns
/// - 401 Unauthorized - `Unauthorized`
/// - 404 Not Found - `TeacherNotFound`, `CourseNotFound`
/// - 409 Conflict - `CourseHasStudents`, `CourseStarted`
/// - 400 Bad Request - Everything else
impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::TeacherNotFound | Self::CourseNotFound => StatusCode::NOT_FOUND,
            Self::CourseHasStudents | Self::CourseStarted => StatusCode::CONFLICT,
            Self::InvalidDateFormat
            | Self::PastStartDate
            | Self::InvalidSemester(_)
            | Self::InvalidField(_)
            | Self::InvalidStudentNum { .. } => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
