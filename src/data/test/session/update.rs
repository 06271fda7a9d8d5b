use super::*;

/// Tests a partial session update.
///
/// Verifies that fields absent from the DTO keep their current values.
///
/// Expected: Ok with place changed and name unchanged
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let session = factory::session::SessionFactory::new(db, game.id)
        .name("Session Zero")
        .place("Town library")
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let updated = repo
        .update(
            session,
            UpdateSessionDto {
                name: None,
                is_presential: None,
                datetime: None,
                place: Some("Game store".to_string()),
                observations: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Session Zero");
    assert_eq!(updated.place.as_deref(), Some("Game store"));

    Ok(())
}
