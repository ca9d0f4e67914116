//! Enrollment domain models.

use chrono::{DateTime, Utc};

use crate::model::enrollment::{CourseStudentDto, EnrollmentDto};

/// A student's seat in a course.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    /// Surrogate user ID of the student.
    pub student_id: i32,
    pub course_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            student_id: entity.student_id,
            course_id: entity.course_id,
            created_at: entity.created_at,
        }
    }

    /// Converts to a DTO identifying the student by their external ID.
    pub fn into_dto(self, student_id_card: String) -> EnrollmentDto {
        EnrollmentDto {
            student_id: student_id_card,
            course_id: self.course_id,
            created_at: self.created_at,
        }
    }
}

/// Roster entry exposed to teachers.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStudent {
    pub id_card: String,
    pub name: String,
}

impl CourseStudent {
    pub fn into_dto(self) -> CourseStudentDto {
        CourseStudentDto {
            id_card: self.id_card,
            name: self.name,
        }
    }
}
