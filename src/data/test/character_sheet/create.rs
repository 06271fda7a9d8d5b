use super::*;

/// Tests creating a character sheet.
///
/// Expected: Ok with all fields persisted and no photo
#[tokio::test]
async fn creates_sheet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::CharacterSheet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = CharacterSheetRepository::new(db);
    let sheet = repo
        .create(
            user.id,
            game.id,
            CreateCharacterSheetDto {
                name: "Grog".to_string(),
                role: Some("Barbarian".to_string()),
                description: Some("Strong and simple".to_string()),
                level: Some(3),
            },
        )
        .await?;

    assert_eq!(sheet.user_id, user.id);
    assert_eq!(sheet.game_id, game.id);
    assert_eq!(sheet.name, "Grog");
    assert_eq!(sheet.role.as_deref(), Some("Barbarian"));
    assert_eq!(sheet.level, Some(3));
    assert!(sheet.character_photo.is_none());

    Ok(())
}
