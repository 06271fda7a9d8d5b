use super::*;

/// Tests paginating a user's notifications.
///
/// Expected: Ok with the requested page size and accurate total
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..5 {
        factory::create_notification(db, user.id).await?;
    }

    let repo = NotificationRepository::new(db);
    let (rows, total) = repo.find_by_user_paginated(user.id, false, 0, 2).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests the unread-only filter.
///
/// Expected: Ok with read notifications excluded from rows and total
#[tokio::test]
async fn filters_unread_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let (rows, total) = repo.find_by_user_paginated(user.id, true, 0, 20).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(total, 1);
    assert!(!rows[0].is_read);

    Ok(())
}

/// Tests that notifications of other users are not included.
///
/// Expected: Ok with only the requested user's notifications
#[tokio::test]
async fn scopes_to_user() -> Result<(), DbErr> {
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
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (rows, total) = repo.find_by_user_paginated(user.id, false, 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].user_id, user.id);

    Ok(())
}
