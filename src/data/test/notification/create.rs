use super::*;

/// Tests creating a notification.
///
/// Expected: Ok with the notification unread and carrying the reference
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let session_id = Uuid::new_v4();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(
            user.id,
            TYPE_SESSION_CREATED,
            "A new session was scheduled".to_string(),
            Some(session_id),
        )
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.kind, TYPE_SESSION_CREATED);
    assert_eq!(notification.reference_id, Some(session_id));
    assert!(!notification.is_read);

    Ok(())
}
