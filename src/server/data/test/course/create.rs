use super::*;

/// Tests creating a course for an existing teacher.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let start_date = Utc::now() + Duration::days(3);

    let course = CourseRepository::new(db)
        .create(CreateCourseParam {
            name: "Compilers".to_string(),
            teacher_id: teacher.id_card.clone(),
            remark: "Dragon book".to_string(),
            student_max_num: 40,
            hours: 48,
            start_date,
            semester: "2025-2".to_string(),
        })
        .await?;

    assert_eq!(course.name, "Compilers");
    assert_eq!(course.teacher_id, teacher.id_card);
    assert_eq!(course.student_max_num, 40);
    assert_eq!(course.hours, 48);
    assert_eq!(course.semester, "2025-2");

    let stored = entity::prelude::Course::find_by_id(course.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a course must reference an existing teacher.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseRepository::new(db)
        .create(CreateCourseParam {
            name: "Orphan".to_string(),
            teacher_id: "missing".to_string(),
            remark: String::new(),
            student_max_num: 10,
            hours: 16,
            start_date: Utc::now() + Duration::days(1),
            semester: "2025-1".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
