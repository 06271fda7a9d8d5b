use super::*;

/// Tests scheduling a session for a game.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let when = Utc.with_ymd_and_hms(2026, 9, 12, 19, 0, 0).unwrap();

    let repo = SessionRepository::new(db);
    let session = repo
        .create(
            game.id,
            CreateSessionDto {
                name: "Session Zero".to_string(),
                is_presential: Some(true),
                datetime: Some(when),
                place: Some("Town library".to_string()),
                observations: Some("Bring dice".to_string()),
            },
        )
        .await?;

    assert_eq!(session.game_id, game.id);
    assert_eq!(session.name, "Session Zero");
    assert_eq!(session.is_presential, Some(true));
    assert_eq!(session.datetime, Some(when));
    assert_eq!(session.place.as_deref(), Some("Town library"));
    assert_eq!(session.observations.as_deref(), Some("Bring dice"));

    Ok(())
}

/// Tests scheduling a session with only a name.
///
/// Expected: Ok with optional fields unset
#[tokio::test]
async fn creates_session_with_minimal_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = SessionRepository::new(db);
    let session = repo
        .create(
            game.id,
            CreateSessionDto {
                name: "Untitled".to_string(),
                is_presential: None,
                datetime: None,
                place: None,
                observations: None,
            },
        )
        .await?;

    assert!(session.is_presential.is_none());
    assert!(session.datetime.is_none());
    assert!(session.place.is_none());

    Ok(())
}
