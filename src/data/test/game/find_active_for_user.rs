use super::*;

/// Tests listing the games a user actively belongs to.
///
/// Verifies that inactive memberships and soft-deleted games are skipped.
///
/// Expected: Ok with only games backed by an active membership
#[tokio::test]
async fn returns_only_active_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let joined = factory::game::GameFactory::new(db)
        .name("Active Table")
        .build()
        .await?;
    factory::subscription::create_subscription(db, user.id, joined.id).await?;

    let left = factory::game::GameFactory::new(db)
        .name("Left Table")
        .build()
        .await?;
    factory::subscription::SubscriptionFactory::new(db, user.id, left.id)
        .is_active(false)
        .build()
        .await?;

    let deleted = factory::game::GameFactory::new(db)
        .name("Deleted Table")
        .is_deleted(true)
        .build()
        .await?;
    factory::subscription::create_subscription(db, user.id, deleted.id).await?;

    let repo = GameRepository::new(db);
    let games = repo.find_active_for_user(user.id).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Active Table");

    Ok(())
}

/// Tests listing games for a user with no memberships.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = GameRepository::new(db);
    let games = repo.find_active_for_user(user.id).await?;

    assert!(games.is_empty());

    Ok(())
}
