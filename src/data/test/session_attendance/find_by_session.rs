use super::*;

/// Tests listing attendance rows of a session with member profiles.
///
/// Expected: Ok with one row per responder and the user joined
#[tokio::test]
async fn returns_rows_with_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let session = factory::create_session(db, game.id).await?;

    let confirmed = factory::create_user(db).await?;
    let declined = factory::create_user(db).await?;

    let repo = SessionAttendanceRepository::new(db);
    repo.upsert(confirmed.id, session.id, Some(true)).await?;
    repo.upsert(declined.id, session.id, Some(false)).await?;

    let rows = repo.find_by_session(session.id).await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|(_, user)| user.is_some()));

    let marks: Vec<Option<bool>> = rows.iter().map(|(a, _)| a.confirm_assist).collect();
    assert!(marks.contains(&Some(true)));
    assert!(marks.contains(&Some(false)));

    Ok(())
}
