use super::*;

/// Tests deleting a session.
///
/// Expected: Ok with the session no longer found afterwards
#[tokio::test]
async fn deletes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let session = factory::create_session(db, game.id).await?;
    let id = session.id;

    let repo = SessionRepository::new(db);
    repo.delete(session).await?;

    assert!(repo.find_by_id(id).await?.is_none());

    Ok(())
}
