//! Enrollment data repository.
//!
//! Enrollment rows are keyed by `(student_id, course_id)`, where `student_id` is the
//! student's surrogate user ID. The composite key makes a duplicate enrollment a
//! unique-constraint violation at insert time.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    data::course::enrolled_count,
    model::enrollment::{CourseStudent, Enrollment},
};

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Takes a seat in a course that has not started and is below capacity.
    ///
    /// Issued as one `INSERT ... SELECT ... FROM course WHERE ...` so the start date,
    /// the capacity and the insert are evaluated by the same statement.
    ///
    /// # Arguments
    /// - `student_id` - Surrogate user ID of the student
    /// - `course_id` - Course to enroll in
    /// - `now` - Enrollment time; courses starting at or before it take no one
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - The created enrollment
    /// - `Ok(None)` - No such course, it already started, or it is full
    /// - `Err(DbErr)` - Database error; a duplicate pair surfaces as
    ///   `SqlErr::UniqueConstraintViolation` via `DbErr::sql_err()`
    pub async fn create(
        &self,
        student_id: i32,
        course_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Enrollment>, DbErr> {
        let seat = Query::select()
            .exprs([
                Expr::val(student_id),
                Expr::col((entity::prelude::Course, entity::course::Column::Id)),
                Expr::val(now),
            ])
            .from(entity::prelude::Course)
            .and_where(
                Expr::col((entity::prelude::Course, entity::course::Column::Id)).eq(course_id),
            )
            .and_where(
                Expr::col((entity::prelude::Course, entity::course::Column::StartDate)).gt(now),
            )
            .and_where(
                Expr::from(enrolled_count()).lt(Expr::col((
                    entity::prelude::Course,
                    entity::course::Column::StudentMaxNum,
                ))),
            )
            .to_owned();

        let insert = Query::insert()
            .into_table(entity::prelude::Enrollment)
            .columns([
                entity::enrollment::Column::StudentId,
                entity::enrollment::Column::CourseId,
                entity::enrollment::Column::CreatedAt,
            ])
            .select_from(seat)
            .map_err(|err| DbErr::Custom(err.to_string()))?
            .to_owned();

        let result = self.db.execute(&insert).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Enrollment {
            student_id,
            course_id,
            created_at: now,
        }))
    }

    pub async fn find(&self, student_id: i32, course_id: i32) -> Result<Option<Enrollment>, DbErr> {
        let entity = entity::prelude::Enrollment::find_by_id((student_id, course_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Enrollment::from_entity))
    }

    /// Number of students currently enrolled in a course.
    pub async fn count_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }

    /// Deletes an enrollment row.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - The student was not enrolled
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, student_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Enrollment::delete_by_id((student_id, course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// IDs of every course the student is enrolled in.
    pub async fn course_ids_for_student(&self, student_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Enrollment::find()
            .select_only()
            .column(entity::enrollment::Column::CourseId)
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Roster of a course ordered by student name.
    pub async fn get_students_by_course(&self, course_id: i32) -> Result<Vec<CourseStudent>, DbErr> {
        let students = entity::prelude::User::find()
            .inner_join(entity::prelude::Enrollment)
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::IdCard)
            .all(self.db)
            .await?
            .into_iter()
            .map(|student| CourseStudent {
                id_card: student.id_card,
                name: student.name,
            })
            .collect();

        Ok(students)
    }
}
