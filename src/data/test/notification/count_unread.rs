use super::*;

/// Tests the unread badge count.
///
/// Expected: Ok counting only the user's unread notifications
#[tokio::test]
async fn counts_only_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.count_unread(user.id).await?, 2);

    Ok(())
}
