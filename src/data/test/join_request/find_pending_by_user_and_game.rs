use super::*;

/// Tests the duplicate-application check.
///
/// Expected: Ok with Some for a pending request and None once resolved
#[tokio::test]
async fn ignores_resolved_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::JoinRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;

    factory::create_join_request(db, user.id, game.id).await?;
    factory::join_request::JoinRequestFactory::new(db, user.id, other_game.id)
        .status(STATUS_ACCEPTED)
        .build()
        .await?;

    let repo = JoinRequestRepository::new(db);

    assert!(repo
        .find_pending_by_user_and_game(user.id, game.id)
        .await?
        .is_some());
    assert!(repo
        .find_pending_by_user_and_game(user.id, other_game.id)
        .await?
        .is_none());

    Ok(())
}
