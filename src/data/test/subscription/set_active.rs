use super::*;

/// Tests deactivating and reactivating a membership.
///
/// Leaving a game flips the row inactive, rejoining flips it back, keeping
/// the role and in-game nickname.
///
/// Expected: Ok with is_active toggled and other fields untouched
#[tokio::test]
async fn toggles_membership_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let subscription = factory::subscription::SubscriptionFactory::new(db, user.id, game.id)
        .game_nickname("Strider")
        .build()
        .await?;

    let repo = SubscriptionRepository::new(db);

    repo.set_active(subscription.id, false).await?;
    let row = repo.find_by_user_and_game(user.id, game.id).await?.unwrap();
    assert!(!row.is_active);
    assert_eq!(row.game_nickname.as_deref(), Some("Strider"));

    repo.set_active(subscription.id, true).await?;
    let row = repo.find_by_user_and_game(user.id, game.id).await?.unwrap();
    assert!(row.is_active);

    Ok(())
}
