use super::*;

/// Tests enrolling a student into an open course.
///
/// Expected: Ok(Some) with the pair stored
#[tokio::test]
async fn creates_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;
    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo.create(student.id, course.id, Utc::now()).await?.unwrap();

    assert_eq!(enrollment.student_id, student.id);
    assert_eq!(enrollment.course_id, course.id);
    assert!(repo.find(student.id, course.id).await?.is_some());

    Ok(())
}

/// Tests that the composite key rejects a duplicate pair.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn duplicate_pair_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;
    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    repo.create(student.id, course.id, Utc::now()).await?;
    let err = repo.create(student.id, course.id, Utc::now()).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a full course takes no further students.
///
/// Expected: Ok(None) and the count stays at capacity
#[tokio::test]
async fn full_course_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = CourseFactory::new(db, &teacher.id_card)
        .student_max_num(2)
        .build()
        .await?;
    factory::fill_course(db, course.id, 2).await?;
    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);

    assert!(repo.create(student.id, course.id, Utc::now()).await?.is_none());
    assert_eq!(repo.count_by_course(course.id).await?, 2);

    Ok(())
}

/// Tests that a course which already started takes no students.
///
/// Expected: Ok(None) with no row stored
#[tokio::test]
async fn started_course_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = CourseFactory::new(db, &teacher.id_card)
        .start_date(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);

    assert!(repo.create(student.id, course.id, Utc::now()).await?.is_none());
    assert!(repo.find(student.id, course.id).await?.is_none());

    Ok(())
}

/// Tests enrolling into a course that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_course_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let created = EnrollmentRepository::new(db)
        .create(student.id, 999, Utc::now())
        .await?;

    assert!(created.is_none());

    Ok(())
}
