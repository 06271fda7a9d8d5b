use super::*;

/// Tests listing all sheets of a game.
///
/// Expected: Ok with sheets of other games excluded
#[tokio::test]
async fn scopes_to_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::CharacterSheet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;

    factory::create_character_sheet(db, user.id, game.id).await?;
    factory::create_character_sheet(db, user.id, other.id).await?;

    let repo = CharacterSheetRepository::new(db);
    let sheets = repo.find_by_game(game.id).await?;

    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].game_id, game.id);

    Ok(())
}

/// Tests listing a user's own sheets within a game.
///
/// Expected: Ok with other players' sheets excluded
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::CharacterSheet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    factory::create_character_sheet(db, user.id, game.id).await?;
    factory::create_character_sheet(db, other.id, game.id).await?;

    let repo = CharacterSheetRepository::new(db);
    let sheets = repo.find_by_user_and_game(user.id, game.id).await?;

    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].user_id, user.id);

    Ok(())
}
