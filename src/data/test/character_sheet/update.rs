use super::*;

/// Tests a partial sheet update.
///
/// Verifies that fields absent from the DTO keep their current values.
///
/// Expected: Ok with level changed and name unchanged
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::CharacterSheet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let sheet = factory::character_sheet::CharacterSheetFactory::new(db, user.id, game.id)
        .name("Grog")
        .level(3)
        .build()
        .await?;

    let repo = CharacterSheetRepository::new(db);
    let updated = repo
        .update(
            sheet,
            UpdateCharacterSheetDto {
                name: None,
                role: None,
                description: None,
                level: Some(4),
            },
        )
        .await?;

    assert_eq!(updated.name, "Grog");
    assert_eq!(updated.level, Some(4));

    Ok(())
}
