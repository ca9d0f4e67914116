use super::*;

fn param(id_card: &str, role: UserRole) -> CreateUserParam {
    CreateUserParam {
        id_card: id_card.to_string(),
        name: "Grace".to_string(),
        password_hash: "hash".to_string(),
        role,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores the identity, name, hash and role and
/// converts the stored role back into the domain enum.
///
/// Expected: Ok with a teacher user
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(param("T100", UserRole::Teacher))
        .await?;

    assert_eq!(user.id_card, "T100");
    assert_eq!(user.name, "Grace");
    assert_eq!(user.password_hash, "hash");
    assert!(user.is_teacher());

    Ok(())
}

/// Tests that `id_card` is unique.
///
/// Expected: Err on the second insert with the same `id_card`
#[tokio::test]
async fn rejects_duplicate_id_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("S200", UserRole::Student)).await?;
    let result = repo.create(param("S200", UserRole::Teacher)).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests reading a row whose stored role is neither student nor teacher.
///
/// Expected: Err(DbErr::Type)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("janitor")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(user.id).await;

    assert!(matches!(result, Err(DbErr::Type(_))));

    Ok(())
}
