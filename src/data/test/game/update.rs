use super::*;

/// Tests a partial game update.
///
/// Verifies that fields absent from the DTO keep their current values.
///
/// Expected: Ok with description changed and name unchanged
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db)
        .name("Curse of Strahd")
        .description("Old pitch")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            game,
            UpdateGameDto {
                name: None,
                description: Some("New pitch".to_string()),
                max_players: None,
                is_public: None,
                theme_id: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Curse of Strahd");
    assert_eq!(updated.description.as_deref(), Some("New pitch"));

    Ok(())
}

/// Tests updating the seat limit.
///
/// Expected: Ok with max_players replaced
#[tokio::test]
async fn updates_seat_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db).max_players(4).build().await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            game,
            UpdateGameDto {
                name: None,
                description: None,
                max_players: Some(6),
                is_public: None,
                theme_id: None,
            },
        )
        .await?;

    assert_eq!(updated.max_players, Some(6));

    Ok(())
}
