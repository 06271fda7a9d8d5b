use super::*;

/// Tests the dedup check for repeated notification triggers.
///
/// An unread notification of the same kind and reference suppresses a new
/// one; a read one does not.
///
/// Expected: Ok(true) while unread, Ok(false) after being read
#[tokio::test]
async fn detects_unread_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game_id = Uuid::new_v4();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(
            user.id,
            TYPE_UNREAD_MESSAGES,
            "New messages".to_string(),
            Some(game_id),
        )
        .await?;

    assert!(repo.unread_exists(user.id, TYPE_UNREAD_MESSAGES, game_id).await?);

    repo.mark_read(notification.id).await?;

    assert!(!repo.unread_exists(user.id, TYPE_UNREAD_MESSAGES, game_id).await?);

    Ok(())
}

/// Tests that the dedup check is scoped by kind and reference.
///
/// Expected: Ok(false) for a different kind or reference
#[tokio::test]
async fn scopes_by_kind_and_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game_id = Uuid::new_v4();

    let repo = NotificationRepository::new(db);
    repo.create(
        user.id,
        TYPE_UNREAD_MESSAGES,
        "New messages".to_string(),
        Some(game_id),
    )
    .await?;

    assert!(!repo
        .unread_exists(user.id, TYPE_SESSION_CREATED, game_id)
        .await?);
    assert!(!repo
        .unread_exists(user.id, TYPE_UNREAD_MESSAGES, Uuid::new_v4())
        .await?);

    Ok(())
}
