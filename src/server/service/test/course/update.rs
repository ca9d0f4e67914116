use super::*;

/// Tests changing capacity and remark of a future course.
///
/// Expected: Ok with only the supplied fields changed
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course) = factory::helpers::create_course_with_teacher(db).await?;

    let updated = CourseService::new(db, CourseRules::default())
        .update(
            Some(&teacher.id_card),
            course.id,
            UpdateCourseParams {
                student_max_num: Some(50),
                remark: Some("Bring a laptop".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.student_max_num, 50);
    assert_eq!(updated.remark, "Bring a laptop");
    assert_eq!(updated.name, course.name);
    assert_eq!(updated.semester, course.semester);

    Ok(())
}

/// Tests lowering capacity below the enrolled count.
///
/// Expected: Err(CourseError::InvalidStudentNum) carrying both numbers, course unchanged
#[tokio::test]
async fn rejects_capacity_below_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course) = factory::helpers::create_course_with_teacher(db).await?;
    factory::fill_course(db, course.id, 3).await?;

    let service = CourseService::new(db, CourseRules::default());
    let result = service
        .update(
            Some(&teacher.id_card),
            course.id,
            UpdateCourseParams {
                student_max_num: Some(2),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AppError::CourseErr(err @ CourseError::InvalidStudentNum { .. })) => {
            let message = err.to_string();
            assert!(message.contains('2'));
            assert!(message.contains('3'));
        }
        other => panic!("Expected InvalidStudentNum, got: {:?}", other),
    }

    let (unchanged, enrolled) = service.get(course.id).await?;
    assert_eq!(unchanged.student_max_num, course.student_max_num);
    assert_eq!(enrolled, 3);

    Ok(())
}

/// Tests that capacity may be lowered to exactly the enrolled count.
///
/// Expected: Ok
#[tokio::test]
async fn allows_capacity_equal_to_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course) = factory::helpers::create_course_with_teacher(db).await?;
    factory::fill_course(db, course.id, 2).await?;

    let updated = CourseService::new(db, CourseRules::default())
        .update(
            Some(&teacher.id_card),
            course.id,
            UpdateCourseParams {
                student_max_num: Some(2),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.student_max_num, 2);

    Ok(())
}

/// Tests that a new start date without a semester re-derives the semester.
///
/// Expected: Ok with start date and semester both updated
#[tokio::test]
async fn new_start_date_rederives_semester() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = factory::course::CourseFactory::new(db, &teacher.id_card)
        .semester("1999-1")
        .build()
        .await?;

    let rules = CourseRules::default();
    let start = start_in_days(60);

    let updated = CourseService::new(db, rules)
        .update(
            Some(&teacher.id_card),
            course.id,
            UpdateCourseParams {
                start_date: Some(start.clone()),
                ..Default::default()
            },
        )
        .await?;

    let expected_start = CourseService::parse_start_date(&start, &rules)?;
    assert_eq!(updated.start_date, expected_start);
    assert_eq!(
        Some(updated.semester),
        rules.semester.semester_for(&expected_start.date_naive())
    );

    Ok(())
}

/// Tests updating a course owned by another teacher.
///
/// Expected: Err(CourseError::CourseNotFound)
#[tokio::test]
async fn fails_for_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_teacher(db).await?;
    let other = factory::create_teacher(db).await?;

    let result = CourseService::new(db, CourseRules::default())
        .update(
            Some(&other.id_card),
            course.id,
            UpdateCourseParams {
                hours: Some(10),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CourseErr(CourseError::CourseNotFound))
    ));

    Ok(())
}

/// Tests updating a course that already started.
///
/// Expected: Err(CourseError::CourseStarted)
#[tokio::test]
async fn fails_after_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = factory::course::CourseFactory::new(db, &teacher.id_card)
        .start_date(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let result = CourseService::new(db, CourseRules::default())
        .update(
            Some(&teacher.id_card),
            course.id,
            UpdateCourseParams {
                hours: Some(10),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CourseErr(CourseError::CourseStarted))
    ));

    Ok(())
}

/// Tests that one invalid field blocks the whole update.
///
/// Expected: Err(CourseError::PastStartDate) and the valid field left unwritten
#[tokio::test]
async fn invalid_field_blocks_other_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course) = factory::helpers::create_course_with_teacher(db).await?;
    let service = CourseService::new(db, CourseRules::default());

    let result = service
        .update(
            Some(&teacher.id_card),
            course.id,
            UpdateCourseParams {
                name: Some("Renamed".to_string()),
                start_date: Some(start_in_days(-3)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CourseErr(CourseError::PastStartDate))
    ));

    let (unchanged, _) = service.get(course.id).await?;
    assert_eq!(unchanged.name, course.name);

    Ok(())
}

/// Tests an update that only supplies a remark.
///
/// Expected: Ok with name, start date and capacity unchanged
#[tokio::test]
async fn remark_only_update_keeps_other_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course) = factory::helpers::create_course_with_teacher(db).await?;

    let updated = CourseService::new(db, CourseRules::default())
        .update(
            Some(&teacher.id_card),
            course.id,
            UpdateCourseParams {
                remark: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.remark, "x");
    assert_eq!(updated.name, course.name);
    assert_eq!(updated.start_date, course.start_date);
    assert_eq!(updated.student_max_num, course.student_max_num);

    Ok(())
}

/// Sends an update with one blank field through the same conversion the handler uses.
async fn update_with_blank(dto: UpdateCourseDto) -> Result<(AppError, Course), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course) = factory::helpers::create_course_with_teacher(db).await?;

    let service = CourseService::new(db, CourseRules::default());
    let err = service
        .update(
            Some(&teacher.id_card),
            course.id,
            UpdateCourseParams::from_dto(dto),
        )
        .await
        .unwrap_err();

    let (stored, _) = service.get(course.id).await?;

    Ok((err, stored))
}

/// Tests a supplied but blank start date.
///
/// Expected: Err(CourseError::InvalidDateFormat), course unchanged
#[tokio::test]
async fn rejects_blank_start_date() -> Result<(), AppError> {
    let (err, stored) = update_with_blank(UpdateCourseDto {
        start_date: Some("   ".to_string()),
        remark: Some("changed".to_string()),
        ..Default::default()
    })
    .await?;

    assert!(matches!(
        err,
        AppError::CourseErr(CourseError::InvalidDateFormat)
    ));
    assert_eq!(stored.remark, "");

    Ok(())
}

/// Tests a supplied but blank semester.
///
/// Expected: Err(CourseError::InvalidSemester)
#[tokio::test]
async fn rejects_blank_semester() -> Result<(), AppError> {
    let (err, _) = update_with_blank(UpdateCourseDto {
        semester: Some(String::new()),
        ..Default::default()
    })
    .await?;

    assert!(matches!(
        err,
        AppError::CourseErr(CourseError::InvalidSemester(_))
    ));

    Ok(())
}

/// Tests a supplied but blank name.
///
/// Expected: Err(CourseError::InvalidField("name")), name unchanged
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let (err, stored) = update_with_blank(UpdateCourseDto {
        name: Some(" ".to_string()),
        ..Default::default()
    })
    .await?;

    assert!(matches!(
        err,
        AppError::CourseErr(CourseError::InvalidField("name"))
    ));
    assert!(!stored.name.trim().is_empty());

    Ok(())
}
