use super::*;

/// Tests that a nickname already in use is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_taken_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("DungeonMaster")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.nickname_taken("DungeonMaster", None).await?);

    Ok(())
}

/// Tests that an unused nickname is reported as free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_free_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.nickname_taken("DungeonMaster", None).await?);

    Ok(())
}

/// Tests that the excluded user keeps their own nickname.
///
/// A profile update resubmitting the current nickname must not count as a
/// collision with the updating user's own row.
///
/// Expected: Ok(false) when the only match is the excluded user
#[tokio::test]
async fn excludes_own_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .nickname("DungeonMaster")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(!repo.nickname_taken("DungeonMaster", Some(user.id)).await?);

    Ok(())
}
