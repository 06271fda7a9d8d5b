use super::*;

/// Tests resolving a pending application.
///
/// Expected: Ok with the new status persisted
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::JoinRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let request = factory::create_join_request(db, user.id, game.id).await?;

    let repo = JoinRequestRepository::new(db);
    let updated = repo.update_status(request, STATUS_ACCEPTED).await?;

    assert_eq!(updated.status, STATUS_ACCEPTED);

    Ok(())
}
