use super::*;

/// Tests creating a new user profile.
///
/// Verifies that the user repository stores the auth subject id, email and
/// the registration fields.
///
/// Expected: Ok with user created and all fields persisted
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = Uuid::new_v4();

    let result = repo
        .create(
            id,
            "gm@example.com".to_string(),
            RegisterUserDto {
                nickname: "DungeonMaster".to_string(),
                bio: Some("Forever GM".to_string()),
                preference: Some("Fantasy".to_string()),
                disponibility: None,
            },
        )
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.email, "gm@example.com");
    assert_eq!(user.nickname, "DungeonMaster");
    assert_eq!(user.bio.as_deref(), Some("Forever GM"));
    assert_eq!(user.preference.as_deref(), Some("Fantasy"));
    assert!(user.disponibility.is_none());

    Ok(())
}

/// Tests that a created user starts without a profile photo.
///
/// Expected: Ok with profile_photo unset
#[tokio::test]
async fn creates_user_without_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            Uuid::new_v4(),
            "player@example.com".to_string(),
            RegisterUserDto {
                nickname: "Player".to_string(),
                bio: None,
                preference: None,
                disponibility: None,
            },
        )
        .await?;

    assert!(user.profile_photo.is_none());

    Ok(())
}
