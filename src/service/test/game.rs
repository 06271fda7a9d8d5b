use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::{
    error::AppError,
    model::game::{CreateGameDto, UpdateGameDto},
    service::{game::GameService, storage::StorageService},
};

use super::test_config;

/// Tests creating a game with a non-positive seat limit.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn create_rejects_non_positive_max_players() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let config = test_config();
    let http = reqwest::Client::new();
    let storage = StorageService::new(&http, &config);

    let creator = factory::create_user(db).await.unwrap();

    let service = GameService::new(db);
    let result = service
        .create(
            &storage,
            creator.id,
            CreateGameDto {
                name: "Curse of the Null Seat".to_string(),
                description: None,
                max_players: Some(-3),
                is_public: None,
                theme_id: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests updating a game's seat limit to zero.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn update_rejects_non_positive_max_players() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let config = test_config();
    let http = reqwest::Client::new();
    let storage = StorageService::new(&http, &config);

    let game = factory::create_game(db).await.unwrap();

    let service = GameService::new(db);
    let result = service
        .update(
            &storage,
            game.id,
            UpdateGameDto {
                name: None,
                description: None,
                max_players: Some(0),
                is_public: None,
                theme_id: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests leaving a game as a plain player.
///
/// Expected: Ok, with the membership deactivated but kept
#[tokio::test]
async fn player_can_leave() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_user(db).await.unwrap();
    let game = factory::create_game(db).await.unwrap();
    factory::create_subscription(db, player.id, game.id).await.unwrap();

    let service = GameService::new(db);
    service.leave(player.id, game.id).await.unwrap();

    let repo = crate::data::subscription::SubscriptionRepository::new(db);
    let subscription = repo
        .find_by_user_and_game(player.id, game.id)
        .await
        .unwrap()
        .unwrap();

    assert!(!subscription.is_active);
}

/// Tests leaving a game as its OWNER.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn owner_cannot_leave() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await.unwrap();
    let game = factory::create_game(db).await.unwrap();
    factory::create_owner_subscription(db, owner.id, game.id).await.unwrap();

    let service = GameService::new(db);
    let result = service.leave(owner.id, game.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

/// Tests leaving a game without a membership.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn outsider_cannot_leave() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outsider = factory::create_user(db).await.unwrap();
    let game = factory::create_game(db).await.unwrap();

    let service = GameService::new(db);
    let result = service.leave(outsider.id, game.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests rejoining after leaving.
///
/// Expected: Ok, with the membership active again
#[tokio::test]
async fn rejoin_reactivates_membership() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_user(db).await.unwrap();
    let game = factory::create_game(db).await.unwrap();
    factory::create_subscription(db, player.id, game.id).await.unwrap();

    let service = GameService::new(db);
    service.leave(player.id, game.id).await.unwrap();
    service.rejoin(player.id, game.id).await.unwrap();

    let repo = crate::data::subscription::SubscriptionRepository::new(db);
    let subscription = repo
        .find_by_user_and_game(player.id, game.id)
        .await
        .unwrap()
        .unwrap();

    assert!(subscription.is_active);
}

/// Tests rejoining without ever having subscribed.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejoin_requires_previous_membership() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outsider = factory::create_user(db).await.unwrap();
    let game = factory::create_game(db).await.unwrap();

    let service = GameService::new(db);
    let result = service.rejoin(outsider.id, game.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests rejoining while the membership is still active.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejoin_rejects_active_member() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_user(db).await.unwrap();
    let game = factory::create_game(db).await.unwrap();
    factory::create_subscription(db, player.id, game.id).await.unwrap();

    let service = GameService::new(db);
    let result = service.rejoin(player.id, game.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

/// Tests rejoining a game whose seats filled up in the meantime.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejoin_rejects_full_game() {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db)
        .max_players(1)
        .build()
        .await
        .unwrap();

    let returning = factory::create_user(db).await.unwrap();
    factory::subscription::SubscriptionFactory::new(db, returning.id, game.id)
        .is_active(false)
        .build()
        .await
        .unwrap();

    let replacement = factory::create_user(db).await.unwrap();
    factory::create_subscription(db, replacement.id, game.id).await.unwrap();

    let service = GameService::new(db);
    let result = service.rejoin(returning.id, game.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}
