//! Course lifecycle rules.
//!
//! Only the owning teacher may change a course, and only until it starts. Start dates
//! are entered in the configured local timezone and stored in UTC; the semester label
//! is either supplied and validated or derived from the local start date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    config::CourseRules,
    data::{course::CourseRepository, enrollment::EnrollmentRepository, user::UserRepository},
    error::{course::CourseError, semester::SemesterError, AppError},
    model::{
        course::{
            Course, CourseFilter, CourseQuery, CreateCourseParam, CreateCourseParams,
            UpdateCourseParam, UpdateCourseParams,
        },
        pagination::{Page, PageRequest},
        semester::validate_semester,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
    rules: CourseRules,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection, rules: CourseRules) -> Self {
        Self { db, rules }
    }

    /// Creates a course owned by the calling teacher.
    ///
    /// # Arguments
    /// - `caller_id`: `id_card` of the caller, `None` when unauthenticated
    /// - `params`: Course fields with an unparsed start date
    ///
    /// # Returns
    /// - `Ok(Course)`: The created course
    /// - `Err(CourseError::Unauthorized)`: No caller identity
    /// - `Err(CourseError::TeacherNotFound)`: Caller is not a registered teacher
    /// - `Err(CourseError::InvalidDateFormat | PastStartDate)`: Bad start date
    /// - `Err(CourseError::InvalidSemester)`: Bad label, or no semester covers the date
    /// - `Err(CourseError::InvalidField)`: Empty name or non-positive capacity/hours
    pub async fn create(
        &self,
        caller_id: Option<&str>,
        params: CreateCourseParams,
    ) -> Result<Course, AppError> {
        let caller_id = require_caller(caller_id)?;

        let teacher = UserRepository::new(self.db)
            .find_by_id_card(caller_id)
            .await?
            .filter(|user| user.is_teacher())
            .ok_or(CourseError::TeacherNotFound)?;

        validate_name(&params.name)?;
        validate_positive("student_max_num", params.student_max_num)?;
        validate_positive("hours", params.hours)?;

        let start_date = self.parse_future_start_date(&params.start_date)?;
        let semester = match params.semester {
            Some(semester) => {
                validate_semester(&semester).map_err(CourseError::from)?;
                semester
            }
            None => self.derive_semester(start_date)?,
        };

        let course = CourseRepository::new(self.db)
            .create(CreateCourseParam {
                name: params.name,
                teacher_id: teacher.id_card,
                remark: params.remark,
                student_max_num: params.student_max_num,
                hours: params.hours,
                start_date,
                semester,
            })
            .await?;

        tracing::info!(
            "Teacher {} created course {} for semester {}",
            course.teacher_id,
            course.id,
            course.semester
        );

        Ok(course)
    }

    /// Updates the supplied fields of a course owned by the caller.
    ///
    /// Every supplied field is validated before anything is written. The write itself
    /// re-checks the start date and, for a new capacity, the enrolled count, so an
    /// enrollment landing between the checks and the write cannot be undercut.
    ///
    /// # Returns
    /// - `Ok(Course)`: The updated course
    /// - `Err(CourseError::Unauthorized)`: No caller identity
    /// - `Err(CourseError::CourseNotFound)`: No such course owned by the caller
    /// - `Err(CourseError::CourseStarted)`: The course already started
    /// - `Err(CourseError::InvalidStudentNum)`: New capacity below current enrollment
    /// - `Err(CourseError::InvalidDateFormat | PastStartDate | InvalidSemester | InvalidField)`
    pub async fn update(
        &self,
        caller_id: Option<&str>,
        course_id: i32,
        params: UpdateCourseParams,
    ) -> Result<Course, AppError> {
        let caller_id = require_caller(caller_id)?;

        let course = self.find_owned(caller_id, course_id).await?;

        let now = Utc::now();
        if course.has_started(now) {
            return Err(CourseError::CourseStarted.into());
        }

        if let Some(name) = &params.name {
            validate_name(name)?;
        }
        if let Some(hours) = params.hours {
            validate_positive("hours", hours)?;
        }
        if let Some(requested) = params.student_max_num {
            validate_positive("student_max_num", requested)?;

            let enrolled = EnrollmentRepository::new(self.db)
                .count_by_course(course_id)
                .await?;
            if (requested as u64) < enrolled {
                return Err(CourseError::InvalidStudentNum {
                    requested,
                    enrolled,
                }
                .into());
            }
        }

        let start_date = params
            .start_date
            .as_deref()
            .map(|value| self.parse_future_start_date(value))
            .transpose()?;

        let semester = match (params.semester, start_date) {
            (Some(semester), _) => {
                validate_semester(&semester).map_err(CourseError::from)?;
                Some(semester)
            }
            (None, Some(start_date)) => Some(self.derive_semester(start_date)?),
            (None, None) => None,
        };

        let updated = CourseRepository::new(self.db)
            .update(
                course_id,
                UpdateCourseParam {
                    name: params.name,
                    remark: params.remark,
                    student_max_num: params.student_max_num,
                    hours: params.hours,
                    start_date,
                    semester,
                },
                now,
            )
            .await?;

        let Some(updated) = updated else {
            return Err(self
                .rejected_update(course_id, params.student_max_num)
                .await?
                .into());
        };

        tracing::info!("Teacher {} updated course {}", caller_id, course_id);

        Ok(updated)
    }

    /// Deletes a course owned by the caller that has no students and has not started.
    ///
    /// # Returns
    /// - `Ok(())`: Course deleted
    /// - `Err(CourseError::Unauthorized | CourseNotFound)`
    /// - `Err(CourseError::CourseHasStudents)`: At least one student is enrolled
    /// - `Err(CourseError::CourseStarted)`: The course already started
    pub async fn delete(&self, caller_id: Option<&str>, course_id: i32) -> Result<(), AppError> {
        let caller_id = require_caller(caller_id)?;

        let course = self.find_owned(caller_id, course_id).await?;

        let enrolled = EnrollmentRepository::new(self.db)
            .count_by_course(course_id)
            .await?;
        if enrolled > 0 {
            return Err(CourseError::CourseHasStudents.into());
        }

        let now = Utc::now();
        if course.has_started(now) {
            return Err(CourseError::CourseStarted.into());
        }

        if !CourseRepository::new(self.db).delete(course_id, now).await? {
            return Err(self.rejected_delete(course_id).await?.into());
        }

        tracing::info!("Teacher {} deleted course {}", caller_id, course_id);

        Ok(())
    }

    /// Fetches one course together with its enrolled count.
    pub async fn get(&self, course_id: i32) -> Result<(Course, u64), AppError> {
        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or(CourseError::CourseNotFound)?;

        let enrolled = EnrollmentRepository::new(self.db)
            .count_by_course(course_id)
            .await?;

        Ok((course, enrolled))
    }

    /// Lists courses of the current semester matching `filter`.
    ///
    /// When the semester calendar does not cover today, no semester restriction is
    /// applied.
    pub async fn list(&self, filter: CourseFilter, page: PageRequest) -> Result<Page<Course>, AppError> {
        let teacher_ids = match &filter.teacher_name {
            Some(name) => {
                let ids = UserRepository::new(self.db)
                    .find_teacher_ids_by_name(name)
                    .await?;
                if ids.is_empty() {
                    return Ok(Page::empty(&page));
                }
                Some(ids)
            }
            None => None,
        };

        let query = CourseQuery {
            name_contains: filter.name,
            teacher_id: filter.teacher_id,
            teacher_ids,
            semester: self.current_semester(),
            course_ids: None,
        };

        let (courses, total) = CourseRepository::new(self.db)
            .get_paginated(&query, &page)
            .await?;

        Ok(Page::new(courses, total, &page))
    }

    /// Lists the calling teacher's own courses in the current semester.
    pub async fn list_for_teacher(
        &self,
        caller_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Course>, AppError> {
        let caller_id = require_caller(caller_id)?;

        let query = CourseQuery {
            teacher_id: Some(caller_id.to_string()),
            semester: self.current_semester(),
            ..Default::default()
        };

        let (courses, total) = CourseRepository::new(self.db)
            .get_paginated(&query, &page)
            .await?;

        Ok(Page::new(courses, total, &page))
    }

    /// Semester covering today in the configured timezone.
    pub fn current_semester(&self) -> Option<String> {
        let today = Utc::now().with_timezone(&self.rules.timezone).date_naive();
        self.rules.semester.semester_for(&today)
    }

    fn parse_future_start_date(&self, value: &str) -> Result<DateTime<Utc>, CourseError> {
        let start_date = Self::parse_start_date(value, &self.rules)?;

        if start_date <= Utc::now() {
            return Err(CourseError::PastStartDate);
        }

        Ok(start_date)
    }

    /// Parses `YYYY-MM-DD` or `YYYY-MM-DD HH:MM` as local time in the configured zone.
    ///
    /// A date without a time means local midnight. Local times skipped by a DST
    /// transition are rejected; ambiguous ones resolve to the earlier instant.
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)`: The instant in UTC
    /// - `Err(CourseError::InvalidDateFormat)`: Neither format matches
    pub fn parse_start_date(value: &str, rules: &CourseRules) -> Result<DateTime<Utc>, CourseError> {
        let value = value.trim();

        let naive = match NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
            Ok(naive) => naive,
            Err(_) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .ok_or(CourseError::InvalidDateFormat)?,
        };

        rules
            .timezone
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or(CourseError::InvalidDateFormat)
    }

    async fn find_owned(&self, caller_id: &str, course_id: i32) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .filter(|course| course.teacher_id == caller_id)
            .ok_or(CourseError::CourseNotFound)?;

        Ok(course)
    }

    /// Classifies a guarded update that changed no row by re-reading the course.
    async fn rejected_update(
        &self,
        course_id: i32,
        requested: Option<i32>,
    ) -> Result<CourseError, DbErr> {
        let Some(course) = CourseRepository::new(self.db).find_by_id(course_id).await? else {
            return Ok(CourseError::CourseNotFound);
        };
        if course.has_started(Utc::now()) {
            return Ok(CourseError::CourseStarted);
        }

        let enrolled = EnrollmentRepository::new(self.db)
            .count_by_course(course_id)
            .await?;

        Ok(CourseError::InvalidStudentNum {
            requested: requested.unwrap_or(course.student_max_num),
            enrolled,
        })
    }

    /// Classifies a guarded delete that removed no row by re-reading the course.
    async fn rejected_delete(&self, course_id: i32) -> Result<CourseError, DbErr> {
        let error = match CourseRepository::new(self.db).find_by_id(course_id).await? {
            None => CourseError::CourseNotFound,
            Some(course) if course.has_started(Utc::now()) => CourseError::CourseStarted,
            Some(_) => CourseError::CourseHasStudents,
        };

        Ok(error)
    }

    fn derive_semester(&self, start_date: DateTime<Utc>) -> Result<String, CourseError> {
        let local_date = start_date.with_timezone(&self.rules.timezone).date_naive();

        self.rules
            .semester
            .semester_for(&local_date)
            .ok_or(CourseError::InvalidSemester(SemesterError::Undetermined(
                local_date,
            )))
    }
}

fn require_caller(caller_id: Option<&str>) -> Result<&str, CourseError> {
    caller_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(CourseError::Unauthorized)
}

fn validate_name(name: &str) -> Result<(), CourseError> {
    if name.trim().is_empty() {
        return Err(CourseError::InvalidField("name"));
    }
    Ok(())
}

fn validate_positive(field: &'static str, value: i32) -> Result<(), CourseError> {
    if value <= 0 {
        return Err(CourseError::InvalidField(field));
    }
    Ok(())
}
