use super::*;

/// Tests listing a game's pending applications with applicant profiles.
///
/// Expected: Ok with resolved requests excluded and user rows joined
#[tokio::test]
async fn returns_pending_with_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(entity::prelude::JoinRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let applicant = factory::create_user(db).await?;
    factory::create_join_request(db, applicant.id, game.id).await?;

    let accepted = factory::create_user(db).await?;
    factory::join_request::JoinRequestFactory::new(db, accepted.id, game.id)
        .status(STATUS_ACCEPTED)
        .build()
        .await?;

    let repo = JoinRequestRepository::new(db);
    let requests = repo.find_pending_by_game(game.id).await?;

    assert_eq!(requests.len(), 1);
    let (request, user) = &requests[0];
    assert_eq!(request.user_id, applicant.id);
    assert_eq!(user.as_ref().map(|u| u.id), Some(applicant.id));

    Ok(())
}
