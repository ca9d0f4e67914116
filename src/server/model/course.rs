//! Course domain models and parameters.
//!
//! Provides the course domain model, the parameter types accepted by the course
//! service, and the query/change types handed to the repository.

use chrono::{DateTime, Utc};

use crate::{
    model::course::{
        CourseDetailsDto, CourseDto, CourseListQuery, CreateCourseDto, PaginatedCoursesDto,
        UpdateCourseDto,
    },
    server::model::pagination::Page,
};

/// A course owned by one teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    /// `id_card` of the owning teacher.
    pub teacher_id: String,
    pub remark: String,
    /// Capacity; the enrolled count never exceeds it.
    pub student_max_num: i32,
    pub hours: i32,
    pub start_date: DateTime<Utc>,
    /// Semester label such as `2025-1`.
    pub semester: String,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Converts an entity model to a course domain model at the repository boundary.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            teacher_id: entity.teacher_id,
            remark: entity.remark,
            student_max_num: entity.student_max_num,
            hours: entity.hours,
            start_date: entity.start_date,
            semester: entity.semester,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            teacher_id: self.teacher_id,
            remark: self.remark,
            student_max_num: self.student_max_num,
            hours: self.hours,
            start_date: self.start_date,
            semester: self.semester,
            created_at: self.created_at,
        }
    }

    pub fn into_details_dto(self, enrolled: u64) -> CourseDetailsDto {
        CourseDetailsDto {
            course: self.into_dto(),
            enrolled,
        }
    }

    /// A course counts as started once `now` reaches its start date.
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now
    }

    /// Capacity as an unsigned seat count; negative capacities hold no seats.
    pub fn capacity(&self) -> u64 {
        u64::try_from(self.student_max_num).unwrap_or(0)
    }
}

/// Parameters for creating a course, as submitted by the owning teacher.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub name: String,
    pub remark: String,
    pub student_max_num: i32,
    pub hours: i32,
    /// Unparsed local start date.
    pub start_date: String,
    /// Explicit semester label; derived from the start date when `None`.
    pub semester: Option<String>,
}

impl CreateCourseParams {
    pub fn from_dto(dto: CreateCourseDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            remark: dto.remark,
            student_max_num: dto.student_max_num,
            hours: dto.hours,
            start_date: dto.start_date,
            semester: non_blank(dto.semester),
        }
    }
}

impl Page<Course> {
    pub fn into_dto(self) -> PaginatedCoursesDto {
        PaginatedCoursesDto {
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            data: self.items.into_iter().map(Course::into_dto).collect(),
        }
    }
}

/// Partial course update; `None` leaves the field unchanged.
///
/// A supplied field is kept even when blank, so it still goes through validation.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseParams {
    pub name: Option<String>,
    pub remark: Option<String>,
    pub student_max_num: Option<i32>,
    pub hours: Option<i32>,
    pub start_date: Option<String>,
    pub semester: Option<String>,
}

impl UpdateCourseParams {
    pub fn from_dto(dto: UpdateCourseDto) -> Self {
        Self {
            name: trimmed(dto.name),
            remark: dto.remark,
            student_max_num: dto.student_max_num,
            hours: dto.hours,
            start_date: trimmed(dto.start_date),
            semester: trimmed(dto.semester),
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string())
}

/// Treats an empty or whitespace-only string the same as an omitted one.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Validated row for the repository insert.
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub name: String,
    pub teacher_id: String,
    pub remark: String,
    pub student_max_num: i32,
    pub hours: i32,
    pub start_date: DateTime<Utc>,
    pub semester: String,
}

/// Validated column changes for the repository update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCourseParam {
    pub name: Option<String>,
    pub remark: Option<String>,
    pub student_max_num: Option<i32>,
    pub hours: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub semester: Option<String>,
}

/// Filters accepted by the public course listing.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    /// Substring of the course name.
    pub name: Option<String>,
    /// Substring of the owning teacher's name.
    pub teacher_name: Option<String>,
    /// Exact `id_card` of the owning teacher.
    pub teacher_id: Option<String>,
}

impl CourseFilter {
    pub fn from_query(query: &CourseListQuery) -> Self {
        Self {
            name: non_blank(query.name.clone()),
            teacher_name: non_blank(query.teacher_name.clone()),
            teacher_id: non_blank(query.teacher_id.clone()),
        }
    }
}

/// Repository-level course query. All present conditions must hold.
#[derive(Debug, Clone, Default)]
pub struct CourseQuery {
    pub name_contains: Option<String>,
    pub teacher_id: Option<String>,
    /// Restrict to courses owned by any of these teachers.
    pub teacher_ids: Option<Vec<String>>,
    pub semester: Option<String>,
    /// Restrict to these course IDs.
    pub course_ids: Option<Vec<i32>>,
}
