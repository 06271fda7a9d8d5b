use super::*;

/// Tests deleting a user row.
///
/// Expected: Ok with the user no longer found afterwards
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let id = user.id;

    let repo = UserRepository::new(db);
    repo.delete(user).await?;

    assert!(repo.find_by_id(id).await?.is_none());

    Ok(())
}
