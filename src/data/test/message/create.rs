use super::*;

/// Tests posting a text message to a game chat.
///
/// Expected: Ok with content persisted and no image
#[tokio::test]
async fn creates_text_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(game.id, user.id, Some("Roll initiative".to_string()), None)
        .await?;

    assert_eq!(message.game_id, game.id);
    assert_eq!(message.user_id, user.id);
    assert_eq!(message.content.as_deref(), Some("Roll initiative"));
    assert!(message.image_url.is_none());

    Ok(())
}

/// Tests posting an image message.
///
/// Expected: Ok with the image path persisted and no text content
#[tokio::test]
async fn creates_image_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(
            game.id,
            user.id,
            None,
            Some(format!("{}/map.png", game.id)),
        )
        .await?;

    assert!(message.content.is_none());
    assert_eq!(message.image_url, Some(format!("{}/map.png", game.id)));

    Ok(())
}
