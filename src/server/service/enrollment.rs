//! Enrollment eligibility engine.
//!
//! The checks read current state to pick the error a caller sees. The seat itself
//! is taken by a conditional insert that re-checks the start date and capacity, so
//! concurrent enrollments can never overfill a course.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository, user::UserRepository},
    error::{enrollment::EnrollmentError, AppError},
    model::{
        course::{Course, CourseQuery},
        enrollment::{CourseStudent, Enrollment},
        pagination::{Page, PageRequest},
        user::User,
    },
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a student into a course.
    ///
    /// Checks run in order: student and course exist, the student is not already
    /// enrolled, the course has not started, a seat is free.
    ///
    /// # Arguments
    /// - `student_id`: `id_card` of the student
    /// - `course_id`: ID of the course
    ///
    /// # Returns
    /// - `Ok(Enrollment)`: The new enrollment
    /// - `Err(EnrollmentError::StudentNotFound | CourseNotFound)`
    /// - `Err(EnrollmentError::AlreadyEnrolled)`: Including a duplicate caught by the key
    /// - `Err(EnrollmentError::CourseStarted)`
    /// - `Err(EnrollmentError::CourseFull)`: Enrolled count already at capacity
    pub async fn enroll(&self, student_id: &str, course_id: i32) -> Result<Enrollment, AppError> {
        let student = find_student(self.db, student_id).await?;
        let course = find_course(self.db, course_id).await?;

        let enrollment_repo = EnrollmentRepository::new(self.db);

        if enrollment_repo.find(student.id, course.id).await?.is_some() {
            return Err(EnrollmentError::AlreadyEnrolled.into());
        }

        let now = Utc::now();
        if course.has_started(now) {
            return Err(EnrollmentError::CourseStarted.into());
        }

        let enrolled = enrollment_repo.count_by_course(course.id).await?;
        if enrolled >= course.capacity() {
            return Err(EnrollmentError::CourseFull.into());
        }

        let Some(enrollment) = enrollment_repo
            .create(student.id, course.id, now)
            .await
            .map_err(map_duplicate_enrollment)?
        else {
            return Err(self.rejected_enrollment(course_id).await?.into());
        };

        tracing::info!(
            "Student {} enrolled in course {} (capacity {})",
            student.id_card,
            course.id,
            course.student_max_num
        );

        Ok(enrollment)
    }

    /// Drops a student's enrollment before the course starts.
    ///
    /// # Returns
    /// - `Ok(())`: Enrollment removed
    /// - `Err(EnrollmentError::StudentNotFound | CourseNotFound)`
    /// - `Err(EnrollmentError::NotEnrolled)`: Including a concurrent drop of the same pair
    /// - `Err(EnrollmentError::CourseStarted)`
    pub async fn drop_course(&self, student_id: &str, course_id: i32) -> Result<(), AppError> {
        let student = find_student(self.db, student_id).await?;
        let course = find_course(self.db, course_id).await?;

        let enrollment_repo = EnrollmentRepository::new(self.db);

        if enrollment_repo.find(student.id, course.id).await?.is_none() {
            return Err(EnrollmentError::NotEnrolled.into());
        }

        if course.has_started(Utc::now()) {
            return Err(EnrollmentError::CourseStarted.into());
        }

        if !enrollment_repo.delete(student.id, course.id).await? {
            return Err(EnrollmentError::NotEnrolled.into());
        }

        tracing::info!("Student {} dropped course {}", student.id_card, course.id);

        Ok(())
    }

    /// Classifies a conditional insert that took no seat by re-reading the course.
    async fn rejected_enrollment(&self, course_id: i32) -> Result<EnrollmentError, DbErr> {
        let error = match CourseRepository::new(self.db).find_by_id(course_id).await? {
            None => EnrollmentError::CourseNotFound,
            Some(course) if course.has_started(Utc::now()) => EnrollmentError::CourseStarted,
            Some(_) => EnrollmentError::CourseFull,
        };

        Ok(error)
    }

    /// Lists the courses a student is enrolled in, across all semesters.
    pub async fn list_student_courses(
        &self,
        student_id: &str,
        page: PageRequest,
    ) -> Result<Page<Course>, AppError> {
        let student = find_student(self.db, student_id).await?;

        let course_ids = EnrollmentRepository::new(self.db)
            .course_ids_for_student(student.id)
            .await?;
        if course_ids.is_empty() {
            return Ok(Page::empty(&page));
        }

        let query = CourseQuery {
            course_ids: Some(course_ids),
            ..Default::default()
        };
        let (courses, total) = CourseRepository::new(self.db)
            .get_paginated(&query, &page)
            .await?;

        Ok(Page::new(courses, total, &page))
    }

    /// Roster of a course, limited to each student's `id_card` and name.
    ///
    /// # Returns
    /// - `Ok(Vec<CourseStudent>)`: Enrolled students ordered by name
    /// - `Err(EnrollmentError::CourseNotFound)`
    pub async fn list_course_students(&self, course_id: i32) -> Result<Vec<CourseStudent>, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or(EnrollmentError::CourseNotFound)?;

        let students = EnrollmentRepository::new(self.db)
            .get_students_by_course(course_id)
            .await?;

        Ok(students)
    }
}

async fn find_student<C: ConnectionTrait>(db: &C, student_id: &str) -> Result<User, AppError> {
    let student = UserRepository::new(db)
        .find_by_id_card(student_id)
        .await?
        .filter(|user| user.is_student())
        .ok_or(EnrollmentError::StudentNotFound)?;

    Ok(student)
}

async fn find_course<C: ConnectionTrait>(db: &C, course_id: i32) -> Result<Course, AppError> {
    let course = CourseRepository::new(db)
        .find_by_id(course_id)
        .await?
        .ok_or(EnrollmentError::CourseNotFound)?;

    Ok(course)
}

/// A unique-key violation on insert means a concurrent request enrolled the same pair.
fn map_duplicate_enrollment(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EnrollmentError::AlreadyEnrolled.into(),
        _ => err.into(),
    }
}
