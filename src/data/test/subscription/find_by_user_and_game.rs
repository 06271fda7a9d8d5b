use super::*;

/// Tests looking up a membership by user and game.
///
/// Inactive memberships are returned too, since rejoin needs to see them.
///
/// Expected: Ok with Some for an inactive membership
#[tokio::test]
async fn finds_inactive_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    factory::subscription::SubscriptionFactory::new(db, user.id, game.id)
        .is_active(false)
        .build()
        .await?;

    let repo = SubscriptionRepository::new(db);
    let found = repo.find_by_user_and_game(user.id, game.id).await?;

    assert!(found.is_some());
    assert!(!found.unwrap().is_active);

    Ok(())
}

/// Tests looking up a membership that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = SubscriptionRepository::new(db);
    let found = repo.find_by_user_and_game(user.id, game.id).await?;

    assert!(found.is_none());

    Ok(())
}
