use super::*;

/// Tests marking a single notification as read.
///
/// Expected: Ok with only that notification flipped
#[tokio::test]
async fn marks_single_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    repo.mark_read(first.id).await?;

    assert_eq!(repo.count_unread(user.id).await?, 1);
    assert!(repo.find_by_id(first.id).await?.unwrap().is_read);

    Ok(())
}

/// Tests marking all of a user's notifications as read.
///
/// Expected: Ok with the affected count and zero unread afterwards
#[tokio::test]
async fn marks_all_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let affected = repo.mark_all_read(user.id).await?;

    assert_eq!(affected, 2);
    assert_eq!(repo.count_unread(user.id).await?, 0);
    assert_eq!(repo.count_unread(other.id).await?, 1);

    Ok(())
}
