use test_utils::builder::TestBuilder;
use test_utils::factory;
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::auth::AuthUser,
    model::user::RegisterUserDto,
    service::{auth_admin::AuthAdminService, storage::StorageService, user::UserService},
};

use super::test_config;

fn register_dto(nickname: &str) -> RegisterUserDto {
    RegisterUserDto {
        nickname: nickname.to_string(),
        bio: None,
        preference: None,
        disponibility: None,
    }
}

/// Tests registering a profile for a fresh auth account.
///
/// Expected: Ok with the token identity and requested nickname
#[tokio::test]
async fn registers_new_profile() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = test_config();
    let http = reqwest::Client::new();
    let auth_admin = AuthAdminService::new(&http, &config);
    let storage = StorageService::new(&http, &config);

    let caller = AuthUser {
        id: Uuid::new_v4(),
        email: "gm@example.com".to_string(),
    };

    let service = UserService::new(db);
    let profile = service
        .register(&auth_admin, &storage, &caller, register_dto("DungeonMaster"))
        .await
        .unwrap();

    assert_eq!(profile.id, caller.id);
    assert_eq!(profile.email, "gm@example.com");
    assert_eq!(profile.nickname, "DungeonMaster");
}

/// Tests registering with an email that already has a profile.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await.unwrap();

    let config = test_config();
    let http = reqwest::Client::new();
    let auth_admin = AuthAdminService::new(&http, &config);
    let storage = StorageService::new(&http, &config);

    let caller = AuthUser {
        id: Uuid::new_v4(),
        email: existing.email,
    };

    let service = UserService::new(db);
    let result = service
        .register(&auth_admin, &storage, &caller, register_dto("SomeoneElse"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

/// Tests registering with a nickname another user already holds.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_nickname() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await.unwrap();

    let config = test_config();
    let http = reqwest::Client::new();
    let auth_admin = AuthAdminService::new(&http, &config);
    let storage = StorageService::new(&http, &config);

    let caller = AuthUser {
        id: Uuid::new_v4(),
        email: "fresh@example.com".to_string(),
    };

    let service = UserService::new(db);
    let result = service
        .register(&auth_admin, &storage, &caller, register_dto(&existing.nickname))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

/// Tests the get-or-create login for a subject without a profile.
///
/// Expected: Ok with the nickname defaulted to the email local part
#[tokio::test]
async fn login_creates_profile_with_default_nickname() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = test_config();
    let http = reqwest::Client::new();
    let storage = StorageService::new(&http, &config);

    let caller = AuthUser {
        id: Uuid::new_v4(),
        email: "rolling.stone@example.com".to_string(),
    };

    let service = UserService::new(db);
    let profile = service.login(&storage, &caller).await.unwrap();

    assert_eq!(profile.nickname, "rolling.stone");

    // A second login returns the same profile instead of creating another.
    let again = service.login(&storage, &caller).await.unwrap();
    assert_eq!(again.id, profile.id);
}
