use super::*;

/// Tests applying to join a game.
///
/// Expected: Ok with a PENDING request carrying the optional message
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::JoinRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = JoinRequestRepository::new(db);
    let request = repo
        .create(user.id, game.id, Some("Long time GM, new player".to_string()))
        .await?;

    assert_eq!(request.user_id, user.id);
    assert_eq!(request.game_id, game.id);
    assert_eq!(request.status, STATUS_PENDING);
    assert_eq!(request.message.as_deref(), Some("Long time GM, new player"));

    Ok(())
}
