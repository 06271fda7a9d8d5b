use super::*;

/// Tests resetting an existing mark back to pending.
///
/// Expected: Ok(true) with the mark cleared
#[tokio::test]
async fn resets_mark_to_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let session = factory::create_session(db, game.id).await?;

    let repo = SessionAttendanceRepository::new(db);
    repo.upsert(user.id, session.id, Some(true)).await?;

    let updated = repo.update_mark(user.id, session.id, None).await?;
    assert!(updated);

    let row = repo.find(user.id, session.id).await?.unwrap();
    assert!(row.confirm_assist.is_none());

    Ok(())
}

/// Tests updating a mark with no attendance row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let session = factory::create_session(db, game.id).await?;

    let repo = SessionAttendanceRepository::new(db);
    let updated = repo.update_mark(user.id, session.id, Some(false)).await?;

    assert!(!updated);

    Ok(())
}
