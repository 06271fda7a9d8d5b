use super::*;

/// Tests listing a user's incoming pending requests.
///
/// Expected: Ok with sent and already-resolved requests excluded
#[tokio::test]
async fn returns_only_incoming_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;

    // Incoming pending, outgoing pending, incoming accepted
    factory::create_friend_request(db, bob.id, alice.id).await?;
    factory::create_friend_request(db, alice.id, carol.id).await?;
    factory::create_friendship(db, carol.id, alice.id).await?;

    let repo = FriendRequestRepository::new(db);
    let requests = repo.find_pending_received(alice.id).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].sender_id, bob.id);

    Ok(())
}
