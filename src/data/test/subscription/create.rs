use super::*;

/// Tests creating an owner membership.
///
/// Expected: Ok with OWNER role, admin flag and active state
#[tokio::test]
async fn creates_owner_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = SubscriptionRepository::new(db);
    let subscription = repo.create(user.id, game.id, ROLE_OWNER, true).await?;

    assert_eq!(subscription.role, ROLE_OWNER);
    assert!(subscription.is_admin);
    assert!(subscription.is_active);

    Ok(())
}

/// Tests creating a player membership.
///
/// Expected: Ok with PLAYER role and no admin flag
#[tokio::test]
async fn creates_player_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = SubscriptionRepository::new(db);
    let subscription = repo.create(user.id, game.id, ROLE_PLAYER, false).await?;

    assert_eq!(subscription.role, ROLE_PLAYER);
    assert!(!subscription.is_admin);

    Ok(())
}
