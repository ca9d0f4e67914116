//! Course data repository.
//!
//! Listing queries apply every condition of a `CourseQuery` conjunctively, then sort
//! by the requested column with the course ID as a tie-breaker so pages are stable.
//!
//! Writes that depend on the enrolled count or the start date carry those conditions
//! in their own `WHERE` clause, so each is a single statement with no read before it.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, Query, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    course::{Course, CourseQuery, CreateCourseParam, UpdateCourseParam},
    pagination::{PageRequest, SortField, SortOrder},
};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a validated course.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(DbErr)` - Database error, e.g. the teacher does not exist
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(param.name),
            teacher_id: ActiveValue::Set(param.teacher_id),
            remark: ActiveValue::Set(param.remark),
            student_max_num: ActiveValue::Set(param.student_max_num),
            hours: ActiveValue::Set(param.hours),
            start_date: ActiveValue::Set(param.start_date),
            semester: ActiveValue::Set(param.semester),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Gets one page of courses matching `query`.
    ///
    /// # Arguments
    /// - `query` - Conditions the courses must satisfy
    /// - `page` - Page, page size and ordering
    ///
    /// # Returns
    /// - `Ok((courses, total))` - Courses on the requested page and the total match count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        query: &CourseQuery,
        page: &PageRequest,
    ) -> Result<(Vec<Course>, u64), DbErr> {
        let mut select = entity::prelude::Course::find();

        if let Some(name) = &query.name_contains {
            select = select.filter(entity::course::Column::Name.contains(name));
        }
        if let Some(teacher_id) = &query.teacher_id {
            select = select.filter(entity::course::Column::TeacherId.eq(teacher_id));
        }
        if let Some(teacher_ids) = &query.teacher_ids {
            select = select.filter(entity::course::Column::TeacherId.is_in(teacher_ids.clone()));
        }
        if let Some(semester) = &query.semester {
            select = select.filter(entity::course::Column::Semester.eq(semester));
        }
        if let Some(course_ids) = &query.course_ids {
            select = select.filter(entity::course::Column::Id.is_in(course_ids.clone()));
        }

        let total = select.clone().count(self.db).await?;

        let column = match page.sort_by {
            SortField::Id => entity::course::Column::Id,
            SortField::Hours => entity::course::Column::Hours,
            SortField::StartDate => entity::course::Column::StartDate,
        };
        let order = match page.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let mut select = select.order_by(column, order.clone());
        if page.sort_by != SortField::Id {
            select = select.order_by(entity::course::Column::Id, order);
        }

        let courses = select
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db)
            .await?
            .into_iter()
            .map(Course::from_entity)
            .collect();

        Ok((courses, total))
    }

    /// Applies the supplied column changes to a course that has not started.
    ///
    /// A new `student_max_num` is only written while it is at least the number of
    /// enrolled students, checked in the same `UPDATE` statement.
    ///
    /// # Arguments
    /// - `id` - Course to update
    /// - `param` - Columns to change; `None` fields are left as they are
    /// - `now` - Courses starting at or before this instant are not updated
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The course after the update
    /// - `Ok(None)` - No such course, it already started, or the capacity is below
    ///   the enrolled count
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateCourseParam,
        now: DateTime<Utc>,
    ) -> Result<Option<Course>, DbErr> {
        let mut active_model = <entity::course::ActiveModel as ActiveModelTrait>::default();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(remark) = param.remark {
            active_model.remark = ActiveValue::Set(remark);
        }
        if let Some(student_max_num) = param.student_max_num {
            active_model.student_max_num = ActiveValue::Set(student_max_num);
        }
        if let Some(hours) = param.hours {
            active_model.hours = ActiveValue::Set(hours);
        }
        if let Some(start_date) = param.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(semester) = param.semester {
            active_model.semester = ActiveValue::Set(semester);
        }

        if !active_model.is_changed() {
            return self.find_by_id(id).await;
        }

        let mut update = entity::prelude::Course::update_many()
            .set(active_model)
            .filter(entity::course::Column::Id.eq(id))
            .filter(entity::course::Column::StartDate.gt(now));
        if let Some(student_max_num) = param.student_max_num {
            update = update.filter(Expr::from(enrolled_count()).lte(student_max_num));
        }

        let result = update.exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Deletes a course that has not started and has no enrolled students.
    ///
    /// # Returns
    /// - `Ok(true)` - The course was deleted
    /// - `Ok(false)` - No such course, it already started, or a student is enrolled
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_many()
            .filter(entity::course::Column::Id.eq(id))
            .filter(entity::course::Column::StartDate.gt(now))
            .filter(Expr::from(enrolled_count()).eq(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// `SELECT COUNT(*)` of the enrollments of the course row in the enclosing statement.
pub(crate) fn enrolled_count() -> SelectStatement {
    Query::select()
        .expr(Func::count(Expr::col((
            entity::prelude::Enrollment,
            entity::enrollment::Column::StudentId,
        ))))
        .from(entity::prelude::Enrollment)
        .and_where(
            Expr::col((
                entity::prelude::Enrollment,
                entity::enrollment::Column::CourseId,
            ))
            .equals((entity::prelude::Course, entity::course::Column::Id)),
        )
        .to_owned()
}
