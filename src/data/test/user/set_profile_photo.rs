use super::*;

/// Tests storing a profile photo path.
///
/// Expected: Ok with the path persisted on the user row
#[tokio::test]
async fn stores_photo_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_profile_photo(user.id, Some(format!("{}/avatar.png", user.id)))
        .await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(
        reloaded.profile_photo,
        Some(format!("{}/avatar.png", user.id))
    );

    Ok(())
}

/// Tests clearing a stored profile photo path.
///
/// Expected: Ok with the path removed from the user row
#[tokio::test]
async fn clears_photo_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_profile_photo(user.id, Some("some/path.png".to_string()))
        .await?;
    repo.set_profile_photo(user.id, None).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert!(reloaded.profile_photo.is_none());

    Ok(())
}
