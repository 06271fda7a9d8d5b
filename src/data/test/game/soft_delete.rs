use super::*;

/// Tests soft deleting a game.
///
/// Verifies that the row survives but is flagged deleted and no longer
/// resolvable through the active lookup.
///
/// Expected: Ok with is_deleted set and find_active_by_id returning None
#[tokio::test]
async fn flags_game_as_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    repo.soft_delete(game.id).await?;

    let row = repo.find_by_id(game.id).await?.unwrap();
    assert!(row.is_deleted);
    assert!(repo.find_active_by_id(game.id).await?.is_none());

    Ok(())
}
