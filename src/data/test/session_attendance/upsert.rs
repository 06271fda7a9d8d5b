use super::*;

/// Tests confirming attendance without a prior row.
///
/// Expected: Ok with a new row holding the confirmed mark
#[tokio::test]
async fn creates_row_on_first_confirm() -> Result<(), DbErr> {
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
    let row = repo.upsert(user.id, session.id, Some(true)).await?;

    assert_eq!(row.user_id, user.id);
    assert_eq!(row.session_id, session.id);
    assert_eq!(row.confirm_assist, Some(true));

    Ok(())
}

/// Tests confirming attendance over an existing declined mark.
///
/// Expected: Ok with the mark replaced and still a single row
#[tokio::test]
async fn replaces_existing_mark() -> Result<(), DbErr> {
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
    repo.upsert(user.id, session.id, Some(false)).await?;
    let row = repo.upsert(user.id, session.id, Some(true)).await?;

    assert_eq!(row.confirm_assist, Some(true));

    let rows = repo.find_by_session(session.id).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
