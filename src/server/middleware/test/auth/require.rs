use super::*;

/// Tests a student passing the student check.
///
/// Expected: Ok(User) for the logged-in student
#[tokio::test]
async fn grants_student_access_to_student() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    AuthSession::new(session).set_user_id(student.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Student])
        .await?;

    assert_eq!(user.id_card, student.id_card);
    assert!(user.is_student());

    Ok(())
}

/// Tests a student hitting a teacher-only endpoint.
///
/// Expected: Err(AuthError::AccessDenied) naming the student
#[tokio::test]
async fn denies_teacher_access_to_student() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    AuthSession::new(session).set_user_id(student.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Teacher])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, student.id);
            assert!(message.contains("teacher"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a teacher hitting a student-only endpoint.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_student_access_to_teacher() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let teacher = factory::create_teacher(db).await?;
    AuthSession::new(session).set_user_id(teacher.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Student])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an empty permission list.
///
/// Expected: Ok(User) for any logged-in user
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let teacher = factory::create_teacher(db).await?;
    AuthSession::new(session).set_user_id(teacher.id).await?;

    let user = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(user.id, teacher.id);

    Ok(())
}

/// Tests an unauthenticated request.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(9999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}

/// Tests that logout clears the stored identity.
///
/// Expected: Err(AuthError::UserNotInSession) after clearing
#[tokio::test]
async fn clear_logs_user_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(student.id).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
