use super::*;

/// Tests the roster projection of a course.
///
/// Expected: Ok with each student's id_card and name
#[tokio::test]
async fn lists_enrolled_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;
    let students = factory::fill_course(db, course.id, 2).await?;
    factory::create_student(db).await?;

    let roster = EnrollmentService::new(db)
        .list_course_students(course.id)
        .await?;

    assert_eq!(roster.len(), 2);
    for student in &students {
        assert!(roster
            .iter()
            .any(|s| s.id_card == student.id_card && s.name == student.name));
    }

    Ok(())
}

/// Tests the roster of a missing course.
///
/// Expected: Err(EnrollmentError::CourseNotFound)
#[tokio::test]
async fn fails_for_missing_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EnrollmentService::new(db).list_course_students(7).await;

    assert!(matches!(
        result,
        Err(AppError::EnrollmentErr(EnrollmentError::CourseNotFound))
    ));

    Ok(())
}
