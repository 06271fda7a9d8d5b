use super::*;

/// Tests listing a user's friendships in both roles.
///
/// Expected: Ok with accepted requests where the user is sender or receiver
#[tokio::test]
async fn returns_friendships_in_both_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;
    let dave = factory::create_user(db).await?;

    factory::create_friendship(db, alice.id, bob.id).await?;
    factory::create_friendship(db, carol.id, alice.id).await?;
    factory::create_friend_request(db, alice.id, dave.id).await?;

    let repo = FriendRequestRepository::new(db);
    let friendships = repo.find_accepted_for_user(alice.id).await?;

    assert_eq!(friendships.len(), 2);
    assert!(friendships.iter().all(|f| f.status == STATUS_ACCEPTED));

    Ok(())
}
