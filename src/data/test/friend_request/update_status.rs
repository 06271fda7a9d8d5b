use super::*;

/// Tests accepting a pending request.
///
/// Expected: Ok with status ACCEPTED
#[tokio::test]
async fn accepts_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let request = factory::create_friend_request(db, alice.id, bob.id).await?;

    let repo = FriendRequestRepository::new(db);
    let updated = repo.update_status(request, STATUS_ACCEPTED).await?;

    assert_eq!(updated.status, STATUS_ACCEPTED);

    Ok(())
}

/// Tests rejecting a pending request.
///
/// Expected: Ok with status REJECTED
#[tokio::test]
async fn rejects_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let request = factory::create_friend_request(db, alice.id, bob.id).await?;

    let repo = FriendRequestRepository::new(db);
    let updated = repo.update_status(request, STATUS_REJECTED).await?;

    assert_eq!(updated.status, STATUS_REJECTED);

    Ok(())
}
