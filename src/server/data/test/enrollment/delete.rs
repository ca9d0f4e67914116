use super::*;

/// Tests deleting an enrollment.
///
/// Expected: Ok(true) and no residual row
#[tokio::test]
async fn deletes_existing_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, student.id, course.id).await?;

    let repo = EnrollmentRepository::new(db);

    assert!(repo.delete(student.id, course.id).await?);
    assert!(repo.find(student.id, course.id).await?.is_none());

    Ok(())
}

/// Tests deleting a pair that was never enrolled.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_not_enrolled() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;
    let student = factory::create_student(db).await?;

    assert!(!EnrollmentRepository::new(db)
        .delete(student.id, course.id)
        .await?);

    Ok(())
}
