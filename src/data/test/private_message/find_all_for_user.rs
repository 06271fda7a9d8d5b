use super::*;

/// Tests fetching every direct message involving a user, newest first.
///
/// The conversations overview relies on this ordering to pick the latest
/// message per counterpart.
///
/// Expected: Ok with sent and received messages in reverse chronological order
#[tokio::test]
async fn returns_messages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;

    let base = Utc::now();
    factory::private_message::PrivateMessageFactory::new(db, alice.id, bob.id)
        .content("to bob")
        .created_at(base)
        .build()
        .await?;
    factory::private_message::PrivateMessageFactory::new(db, carol.id, alice.id)
        .content("from carol")
        .created_at(base + Duration::minutes(1))
        .build()
        .await?;
    factory::create_private_message(db, bob.id, carol.id).await?;

    let repo = PrivateMessageRepository::new(db);
    let rows = repo.find_all_for_user(alice.id).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].content.as_deref(), Some("from carol"));
    assert_eq!(rows[1].content.as_deref(), Some("to bob"));

    Ok(())
}
