use super::*;

/// Tests chat pagination with newest-first ordering.
///
/// Expected: Ok with the newest message on the first page and an accurate
/// total count
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let base = Utc::now();
    for i in 0..5 {
        factory::message::MessageFactory::new(db, game.id, user.id)
            .content(format!("msg {}", i))
            .created_at(base + Duration::minutes(i))
            .build()
            .await?;
    }

    let repo = MessageRepository::new(db);
    let (rows, total) = repo.find_by_game_paginated(game.id, 0, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.content.as_deref(), Some("msg 4"));
    assert_eq!(rows[1].0.content.as_deref(), Some("msg 3"));
    assert!(rows.iter().all(|(_, sender)| sender.is_some()));

    Ok(())
}

/// Tests pagination for a game with no messages.
///
/// Expected: Ok with empty page and zero total
#[tokio::test]
async fn returns_empty_for_no_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = MessageRepository::new(db);
    let (rows, total) = repo.find_by_game_paginated(game.id, 0, 20).await?;

    assert!(rows.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that messages of other games never leak into a chat page.
///
/// Expected: Ok with only the requested game's messages
#[tokio::test]
async fn scopes_to_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;

    factory::create_message(db, game.id, user.id).await?;
    factory::create_message(db, other.id, user.id).await?;

    let repo = MessageRepository::new(db);
    let (rows, total) = repo.find_by_game_paginated(game.id, 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].0.game_id, game.id);

    Ok(())
}
