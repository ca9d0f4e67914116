//! Course factory for creating test course entities.
//!
//! Courses default to starting a week from now so that enrollment rules treat them
//! as open. Use [`CourseFactory::start_date`] to build courses that already started.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Datelike, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db, &teacher.id_card)
///     .student_max_num(1)
///     .semester("2025-1")
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    name: String,
    teacher_id: String,
    remark: String,
    student_max_num: i32,
    hours: i32,
    start_date: DateTime<Utc>,
    semester: String,
}

impl<'a, C: ConnectionTrait> CourseFactory<'a, C> {
    /// Creates a new CourseFactory owned by `teacher_id`.
    ///
    /// Defaults:
    /// - name: `"Course {id}"`
    /// - remark: empty
    /// - student_max_num: `30`
    /// - hours: `32`
    /// - start_date: now + 7 days
    /// - semester: `"{current year}-1"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `teacher_id` - `id_card` of an existing teacher
    pub fn new(db: &'a C, teacher_id: impl Into<String>) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            name: format!("Course {}", id),
            teacher_id: teacher_id.into(),
            remark: String::new(),
            student_max_num: 30,
            hours: 32,
            start_date: now + Duration::days(7),
            semester: format!("{}-1", now.year()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    pub fn student_max_num(mut self, student_max_num: i32) -> Self {
        self.student_max_num = student_max_num;
        self
    }

    pub fn hours(mut self, hours: i32) -> Self {
        self.hours = hours;
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown teacher)
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            name: ActiveValue::Set(self.name),
            teacher_id: ActiveValue::Set(self.teacher_id),
            remark: ActiveValue::Set(self.remark),
            student_max_num: ActiveValue::Set(self.student_max_num),
            hours: ActiveValue::Set(self.hours),
            start_date: ActiveValue::Set(self.start_date),
            semester: ActiveValue::Set(self.semester),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values owned by `teacher_id`.
pub async fn create_course<C: ConnectionTrait>(
    db: &C,
    teacher_id: &str,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, teacher_id).build().await
}
