use super::*;

/// Tests listing a game's sessions sorted by scheduled time.
///
/// Expected: Ok with sessions ordered chronologically
#[tokio::test]
async fn orders_sessions_by_datetime() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    factory::session::SessionFactory::new(db, game.id)
        .name("Later")
        .datetime(Utc.with_ymd_and_hms(2026, 10, 1, 19, 0, 0).unwrap())
        .build()
        .await?;
    factory::session::SessionFactory::new(db, game.id)
        .name("Sooner")
        .datetime(Utc.with_ymd_and_hms(2026, 9, 1, 19, 0, 0).unwrap())
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let sessions = repo.find_by_game(game.id).await?;

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].name, "Sooner");
    assert_eq!(sessions[1].name, "Later");

    Ok(())
}

/// Tests that sessions of other games are not included.
///
/// Expected: Ok with only the requested game's sessions
#[tokio::test]
async fn scopes_to_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;

    factory::create_session(db, game.id).await?;
    factory::create_session(db, other.id).await?;

    let repo = SessionRepository::new(db);
    let sessions = repo.find_by_game(game.id).await?;

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].game_id, game.id);

    Ok(())
}
