//! Enrollment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Enrolls the student with surrogate ID `student_id` into `course_id`.
///
/// # Returns
/// - `Ok(entity::enrollment::Model)` - Created enrollment row
/// - `Err(DbErr)` - Duplicate pair or dangling foreign key
pub async fn create_enrollment<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    course_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        course_id: ActiveValue::Set(course_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates `count` fresh students and enrolls each of them into `course_id`.
///
/// # Returns
/// - `Ok(Vec<entity::user::Model>)` - The enrolled students in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn fill_course<C: ConnectionTrait>(
    db: &C,
    course_id: i32,
    count: usize,
) -> Result<Vec<entity::user::Model>, DbErr> {
    let mut students = Vec::with_capacity(count);
    for _ in 0..count {
        let student = crate::factory::user::create_student(db).await?;
        create_enrollment(db, student.id, course_id).await?;
        students.push(student);
    }

    Ok(students)
}
