use crate::{
    model::course::UpdateCourseDto,
    server::{
        config::CourseRules,
        error::{course::CourseError, semester::SemesterError, AppError},
        model::{
            course::{Course, CourseFilter, CreateCourseParams, UpdateCourseParams},
            pagination::PageRequest,
            semester::SemesterConfig,
        },
        service::course::CourseService,
    },
};
use chrono::{Datelike, Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use super::current_semester;

mod delete;
mod parse_start_date;
mod update;

/// A start date `days` from now in the format accepted by the course endpoints.
fn start_in_days(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn create_params(start_date: String) -> CreateCourseParams {
    CreateCourseParams {
        name: "Compilers".to_string(),
        remark: String::new(),
        student_max_num: 30,
        hours: 48,
        start_date,
        semester: None,
    }
}
