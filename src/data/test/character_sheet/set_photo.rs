use super::*;

/// Tests storing and clearing a character photo path.
///
/// Expected: Ok with the path set and later removed
#[tokio::test]
async fn stores_and_clears_photo_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::CharacterSheet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let sheet = factory::create_character_sheet(db, user.id, game.id).await?;

    let repo = CharacterSheetRepository::new(db);

    repo.set_photo(sheet.id, Some(format!("{}/portrait.png", sheet.id)))
        .await?;
    let row = repo.find_by_id(sheet.id).await?.unwrap();
    assert_eq!(
        row.character_photo,
        Some(format!("{}/portrait.png", sheet.id))
    );

    repo.set_photo(sheet.id, None).await?;
    let row = repo.find_by_id(sheet.id).await?.unwrap();
    assert!(row.character_photo.is_none());

    Ok(())
}
