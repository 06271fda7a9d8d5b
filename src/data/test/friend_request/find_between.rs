use super::*;

/// Tests that the lookup finds a request regardless of direction.
///
/// Expected: Ok with Some when querying with the users swapped
#[tokio::test]
async fn matches_either_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_friend_request(db, alice.id, bob.id).await?;

    let repo = FriendRequestRepository::new(db);

    assert!(repo.find_between(alice.id, bob.id).await?.is_some());
    assert!(repo.find_between(bob.id, alice.id).await?.is_some());

    Ok(())
}

/// Tests the accepted-only lookup used for friendship checks.
///
/// Expected: Ok with None for a pending request and Some once accepted
#[tokio::test]
async fn accepted_lookup_ignores_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;

    factory::create_friend_request(db, alice.id, bob.id).await?;
    factory::create_friendship(db, alice.id, carol.id).await?;

    let repo = FriendRequestRepository::new(db);

    assert!(repo.find_accepted_between(alice.id, bob.id).await?.is_none());
    assert!(repo
        .find_accepted_between(carol.id, alice.id)
        .await?
        .is_some());

    Ok(())
}
