use super::*;

/// Tests that name search matches substrings and only returns teachers.
///
/// Creates two teachers and a student sharing part of a name, then searches for
/// the shared fragment.
///
/// Expected: Ok with both teacher IDs and no student ID
#[tokio::test]
async fn matches_teachers_by_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alan = factory::user::UserFactory::new(db)
        .name("Alan Turing")
        .role("teacher")
        .build()
        .await?;
    let alana = factory::user::UserFactory::new(db)
        .name("Alana Smith")
        .role("teacher")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Alan Student")
        .role("student")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Barbara Liskov")
        .role("teacher")
        .build()
        .await?;

    let mut ids = UserRepository::new(db)
        .find_teacher_ids_by_name("Alan")
        .await?;
    ids.sort();

    let mut expected = vec![alan.id_card, alana.id_card];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}
