use super::*;

/// Tests creating a game with all fields supplied.
///
/// Expected: Ok with all fields persisted and is_deleted false
#[tokio::test]
async fn creates_game_with_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::create_theme(db).await?;

    let repo = GameRepository::new(db);
    let game = repo
        .create(CreateGameDto {
            name: "Curse of Strahd".to_string(),
            description: Some("Gothic horror".to_string()),
            max_players: Some(5),
            is_public: Some(false),
            theme_id: Some(theme.id),
        })
        .await?;

    assert_eq!(game.name, "Curse of Strahd");
    assert_eq!(game.description.as_deref(), Some("Gothic horror"));
    assert_eq!(game.max_players, Some(5));
    assert!(!game.is_public);
    assert!(!game.is_deleted);
    assert_eq!(game.theme_id, Some(theme.id));

    Ok(())
}

/// Tests that visibility defaults to public when not supplied.
///
/// Expected: Ok with is_public true
#[tokio::test]
async fn defaults_to_public() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let game = repo
        .create(CreateGameDto {
            name: "Open Table".to_string(),
            description: None,
            max_players: None,
            is_public: None,
            theme_id: None,
        })
        .await?;

    assert!(game.is_public);

    Ok(())
}
