use super::*;

/// Tests deleting an open course without students.
///
/// Expected: Ok(true) with the row gone
#[tokio::test]
async fn deletes_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;

    assert!(CourseRepository::new(db).delete(course.id, Utc::now()).await?);

    let stored = entity::prelude::Course::find_by_id(course.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that a course with an enrolled student is kept.
///
/// Expected: Ok(false) with the row still present
#[tokio::test]
async fn keeps_course_with_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;
    factory::fill_course(db, course.id, 1).await?;

    assert!(!CourseRepository::new(db).delete(course.id, Utc::now()).await?);

    let stored = entity::prelude::Course::find_by_id(course.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a course which already started is kept.
///
/// Expected: Ok(false)
#[tokio::test]
async fn keeps_started_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = CourseFactory::new(db, &teacher.id_card)
        .start_date(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    assert!(!CourseRepository::new(db).delete(course.id, Utc::now()).await?);

    Ok(())
}
