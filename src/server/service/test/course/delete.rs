use super::*;

/// Tests deleting an empty future course.
///
/// Expected: Ok and the course is gone
#[tokio::test]
async fn deletes_empty_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course) = factory::helpers::create_course_with_teacher(db).await?;
    let service = CourseService::new(db, CourseRules::default());

    service.delete(Some(&teacher.id_card), course.id).await?;

    assert!(matches!(
        service.get(course.id).await,
        Err(AppError::CourseErr(CourseError::CourseNotFound))
    ));

    Ok(())
}

/// Tests deleting a course with enrolled students.
///
/// Expected: Err(CourseError::CourseHasStudents)
#[tokio::test]
async fn fails_with_enrolled_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course) = factory::helpers::create_course_with_teacher(db).await?;
    factory::fill_course(db, course.id, 1).await?;

    let result = CourseService::new(db, CourseRules::default())
        .delete(Some(&teacher.id_card), course.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CourseErr(CourseError::CourseHasStudents))
    ));

    Ok(())
}

/// Tests deleting a course that already started.
///
/// Expected: Err(CourseError::CourseStarted)
#[tokio::test]
async fn fails_after_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = factory::course::CourseFactory::new(db, &teacher.id_card)
        .start_date(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let result = CourseService::new(db, CourseRules::default())
        .delete(Some(&teacher.id_card), course.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CourseErr(CourseError::CourseStarted))
    ));

    Ok(())
}

/// Tests deleting another teacher's course.
///
/// Expected: Err(CourseError::CourseNotFound)
#[tokio::test]
async fn fails_for_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;
    let other = factory::create_teacher(db).await?;

    let result = CourseService::new(db, CourseRules::default())
        .delete(Some(&other.id_card), course.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CourseErr(CourseError::CourseNotFound))
    ));

    Ok(())
}

/// Tests deleting without a caller.
///
/// Expected: Err(CourseError::Unauthorized)
#[tokio::test]
async fn fails_without_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;

    let result = CourseService::new(db, CourseRules::default())
        .delete(None, course.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CourseErr(CourseError::Unauthorized))
    ));

    Ok(())
}
