use super::*;

/// Tests deleting a whole conversation.
///
/// Expected: Ok with both directions removed and other chats untouched
#[tokio::test]
async fn deletes_both_directions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;

    factory::create_private_message(db, alice.id, bob.id).await?;
    factory::create_private_message(db, bob.id, alice.id).await?;
    factory::create_private_message(db, alice.id, carol.id).await?;

    let repo = PrivateMessageRepository::new(db);
    let removed = repo.delete_conversation(alice.id, bob.id).await?;

    assert_eq!(removed, 2);

    let (_, remaining) = repo
        .find_conversation_paginated(alice.id, carol.id, 0, 20)
        .await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests collecting stored image paths before deleting a conversation.
///
/// Expected: Ok with only the image-bearing paths returned
#[tokio::test]
async fn takes_image_paths() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    factory::create_private_message(db, alice.id, bob.id).await?;
    factory::private_message::PrivateMessageFactory::new(db, bob.id, alice.id)
        .image_url("dm/photo.png")
        .build()
        .await?;

    let repo = PrivateMessageRepository::new(db);
    let paths = repo.take_image_paths(alice.id, bob.id).await?;

    assert_eq!(paths, vec!["dm/photo.png".to_string()]);

    Ok(())
}
