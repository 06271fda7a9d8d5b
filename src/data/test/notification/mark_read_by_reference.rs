use super::*;

/// Tests clearing notifications when the referenced chat is opened.
///
/// Expected: Ok with only notifications carrying that reference flipped
#[tokio::test]
async fn marks_only_matching_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game_id = Uuid::new_v4();

    factory::notification::NotificationFactory::new(db, user.id)
        .kind(TYPE_UNREAD_MESSAGES)
        .reference_id(game_id)
        .build()
        .await?;
    factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let affected = repo
        .mark_read_by_reference(user.id, TYPE_UNREAD_MESSAGES, game_id)
        .await?;

    assert_eq!(affected, 1);
    assert_eq!(repo.count_unread(user.id).await?, 1);

    Ok(())
}

/// Tests clearing chat notifications when another kind shares the reference.
///
/// Expected: Ok with the other kind's notification left unread
#[tokio::test]
async fn marks_only_matching_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game_id = Uuid::new_v4();

    factory::notification::NotificationFactory::new(db, user.id)
        .kind(TYPE_UNREAD_MESSAGES)
        .reference_id(game_id)
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .kind(TYPE_SESSION_CREATED)
        .reference_id(game_id)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let affected = repo
        .mark_read_by_reference(user.id, TYPE_UNREAD_MESSAGES, game_id)
        .await?;

    assert_eq!(affected, 1);
    assert_eq!(repo.count_unread(user.id).await?, 1);

    Ok(())
}
