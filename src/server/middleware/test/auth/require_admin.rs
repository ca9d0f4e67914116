use super::*;

/// Tests a logged-in admin.
///
/// Expected: Ok(Admin)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .with_admin_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_admin_id(admin.id).await?;

    let found = AuthGuard::new(db, session).require_admin().await?;

    assert_eq!(found.job_no, admin.job_no);

    Ok(())
}

/// Tests that a student session does not grant admin access.
///
/// Expected: Err(AuthError::AdminNotInSession)
#[tokio::test]
async fn denies_access_to_user_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_course_tables()
        .with_admin_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    AuthSession::new(session).set_user_id(student.id).await?;

    let result = AuthGuard::new(db, session).require_admin().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted admin.
///
/// Expected: Err(AuthError::AdminNotInDatabase)
#[tokio::test]
async fn denies_access_for_deleted_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_admin_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_admin_id(77).await?;

    let result = AuthGuard::new(db, session).require_admin().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInDatabase(77)))
    ));

    Ok(())
}
