use super::*;

/// Tests listing a student's courses across semesters.
///
/// Expected: Ok with exactly the enrolled courses, regardless of semester
#[tokio::test]
async fn lists_enrolled_courses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let old = factory::course::CourseFactory::new(db, &teacher.id_card)
        .semester("1999-2")
        .build()
        .await?;
    let new = factory::create_course(db, &teacher.id_card).await?;
    factory::create_course(db, &teacher.id_card).await?;

    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, student.id, old.id).await?;
    factory::create_enrollment(db, student.id, new.id).await?;

    let page = EnrollmentService::new(db)
        .list_student_courses(&student.id_card, PageRequest::default())
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(page.total, 2);
    assert_eq!(ids, vec![old.id, new.id]);

    Ok(())
}

/// Tests a student with no enrollments.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn empty_for_student_without_courses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_course_with_teacher(db).await?;
    let student = factory::create_student(db).await?;

    let page = EnrollmentService::new(db)
        .list_student_courses(&student.id_card, PageRequest::default())
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);

    Ok(())
}

/// Tests listing for a caller who is not a student.
///
/// Expected: Err(EnrollmentError::StudentNotFound)
#[tokio::test]
async fn fails_for_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let result = EnrollmentService::new(db)
        .list_student_courses(&teacher.id_card, PageRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::EnrollmentErr(EnrollmentError::StudentNotFound))
    ));

    Ok(())
}
