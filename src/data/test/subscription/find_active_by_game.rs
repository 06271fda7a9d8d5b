use super::*;

/// Tests listing a game's active members with their profiles.
///
/// Expected: Ok with inactive members excluded and user rows joined
#[tokio::test]
async fn returns_active_members_with_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let active = factory::create_user(db).await?;
    factory::subscription::create_subscription(db, active.id, game.id).await?;

    let inactive = factory::create_user(db).await?;
    factory::subscription::SubscriptionFactory::new(db, inactive.id, game.id)
        .is_active(false)
        .build()
        .await?;

    let repo = SubscriptionRepository::new(db);
    let members = repo.find_active_by_game(game.id).await?;

    assert_eq!(members.len(), 1);
    let (subscription, user) = &members[0];
    assert_eq!(subscription.user_id, active.id);
    assert_eq!(user.as_ref().map(|u| u.id), Some(active.id));

    Ok(())
}
