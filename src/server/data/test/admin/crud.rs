use super::*;

/// Tests creating and finding an admin by job number.
///
/// Expected: Ok with the admin found by both ID and job number
#[tokio::test]
async fn creates_and_finds_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let admin = repo.create("J001".to_string(), "hash".to_string()).await?;

    assert_eq!(repo.find_by_job_no("J001").await?, Some(admin.clone()));
    assert_eq!(repo.find_by_id(admin.id).await?, Some(admin));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests updating only the password hash.
///
/// Expected: Ok(Some) with job number unchanged
#[tokio::test]
async fn updates_password_hash_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let updated = AdminRepository::new(db)
        .update(
            admin.id,
            UpdateAdminParam {
                password_hash: Some("new-hash".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.job_no, admin.job_no);
    assert_eq!(updated.password_hash, "new-hash");

    Ok(())
}

/// Tests update and delete of a missing admin.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn missing_admin_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);

    assert!(repo
        .update(42, UpdateAdminParam::default())
        .await?
        .is_none());
    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests listing admins in ID order after a delete.
///
/// Expected: Ok with the remaining admins
#[tokio::test]
async fn lists_remaining_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_admin(db).await?;
    let second = factory::create_admin(db).await?;
    let third = factory::create_admin(db).await?;

    let repo = AdminRepository::new(db);
    assert!(repo.delete(second.id).await?);

    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}
