use super::*;

/// Tests that a conversation page includes both directions.
///
/// Expected: Ok with messages sent and received merged newest first
#[tokio::test]
async fn merges_both_directions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let base = Utc::now();
    factory::private_message::PrivateMessageFactory::new(db, alice.id, bob.id)
        .content("hi bob")
        .created_at(base)
        .build()
        .await?;
    factory::private_message::PrivateMessageFactory::new(db, bob.id, alice.id)
        .content("hi alice")
        .created_at(base + Duration::minutes(1))
        .build()
        .await?;

    let repo = PrivateMessageRepository::new(db);
    let (rows, total) = repo
        .find_conversation_paginated(alice.id, bob.id, 0, 20)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(rows[0].content.as_deref(), Some("hi alice"));
    assert_eq!(rows[1].content.as_deref(), Some("hi bob"));

    Ok(())
}

/// Tests that a third party's messages are not part of the conversation.
///
/// Expected: Ok with only messages between the two users
#[tokio::test]
async fn excludes_other_conversations() -> Result<(), DbErr> {
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
    factory::create_private_message(db, alice.id, carol.id).await?;

    let repo = PrivateMessageRepository::new(db);
    let (rows, total) = repo
        .find_conversation_paginated(alice.id, bob.id, 0, 20)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].receiver_id, bob.id);

    Ok(())
}
