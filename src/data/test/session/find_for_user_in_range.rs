use super::*;

/// Tests the personal agenda query over a month window.
///
/// Verifies that only sessions inside the window, belonging to games with an
/// active membership, are returned.
///
/// Expected: Ok with out-of-window and non-member sessions excluded
#[tokio::test]
async fn returns_sessions_within_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    factory::subscription::create_subscription(db, user.id, game.id).await?;

    factory::session::SessionFactory::new(db, game.id)
        .name("In September")
        .datetime(Utc.with_ymd_and_hms(2026, 9, 15, 19, 0, 0).unwrap())
        .build()
        .await?;
    factory::session::SessionFactory::new(db, game.id)
        .name("In October")
        .datetime(Utc.with_ymd_and_hms(2026, 10, 2, 19, 0, 0).unwrap())
        .build()
        .await?;

    let stranger_game = factory::create_game(db).await?;
    factory::session::SessionFactory::new(db, stranger_game.id)
        .name("Not my table")
        .datetime(Utc.with_ymd_and_hms(2026, 9, 20, 19, 0, 0).unwrap())
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let sessions = repo
        .find_for_user_in_range(
            user.id,
            Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
        )
        .await?;

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].name, "In September");

    Ok(())
}

/// Tests that sessions of a game the user left are excluded.
///
/// Expected: Ok with empty vector when the membership is inactive
#[tokio::test]
async fn excludes_left_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    factory::subscription::SubscriptionFactory::new(db, user.id, game.id)
        .is_active(false)
        .build()
        .await?;

    factory::session::SessionFactory::new(db, game.id)
        .datetime(Utc.with_ymd_and_hms(2026, 9, 15, 19, 0, 0).unwrap())
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let sessions = repo
        .find_for_user_in_range(
            user.id,
            Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
        )
        .await?;

    assert!(sessions.is_empty());

    Ok(())
}
