use super::*;

/// Tests the active member count used for seat-limit checks.
///
/// Expected: Ok with inactive members not counted
#[tokio::test]
async fn counts_only_active_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        factory::subscription::create_subscription(db, user.id, game.id).await?;
    }

    let gone = factory::create_user(db).await?;
    factory::subscription::SubscriptionFactory::new(db, gone.id, game.id)
        .is_active(false)
        .build()
        .await?;

    let repo = SubscriptionRepository::new(db);
    assert_eq!(repo.count_active_by_game(game.id).await?, 3);

    Ok(())
}
