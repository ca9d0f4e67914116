use chrono::Utc;

use crate::server::config::CourseRules;

mod course;

/// Label of the semester covering today under the default calendar.
fn current_semester() -> String {
    CourseRules::default()
        .semester
        .semester_for(&Utc::now().date_naive())
        .unwrap_or_default()
}
