use super::*;

/// Tests sending a friend request.
///
/// Expected: Ok with a PENDING request from sender to receiver
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let receiver = factory::create_user(db).await?;

    let repo = FriendRequestRepository::new(db);
    let request = repo.create(sender.id, receiver.id).await?;

    assert_eq!(request.sender_id, sender.id);
    assert_eq!(request.receiver_id, receiver.id);
    assert_eq!(request.status, STATUS_PENDING);

    Ok(())
}
