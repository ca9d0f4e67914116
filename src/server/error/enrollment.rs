use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Enrollment eligibility rule violations.
#[derive(Error, Debug)]
pub enum EnrollmentError {
    #[error("Student not found")]
    StudentNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Student is already enrolled in this course")]
    AlreadyEnrolled,

    #[error("Student is not enrolled in this course")]
    NotEnrolled,

    #[error("Course has already started")]
    CourseStarted,

    #[error("Course is full")]
    CourseFull,
}

impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::StudentNotFound | Self::CourseNotFound | Self::NotEnrolled => {
                StatusCode::NOT_FOUND
            }
            Self::AlreadyEnrolled | Self::CourseStarted | Self::CourseFull => StatusCode::CONFLICT,
        };

        error_response(status, self.to_string())
    }
}
