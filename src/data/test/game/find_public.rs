use super::*;

/// Tests discovery only shows public, non-deleted games.
///
/// Expected: Ok with private and deleted games excluded
#[tokio::test]
async fn excludes_private_and_deleted_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .name("Open Table")
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .name("Secret Table")
        .is_public(false)
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .name("Closed Table")
        .is_deleted(true)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.find_public(None).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Open Table");

    Ok(())
}

/// Tests discovery filtered by a name fragment.
///
/// Verifies the filter is case insensitive and matches substrings.
///
/// Expected: Ok with only games whose name contains the fragment
#[tokio::test]
async fn filters_by_name_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .name("Curse of Strahd")
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .name("Tomb of Annihilation")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.find_public(Some("strahd")).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Curse of Strahd");

    Ok(())
}
