use super::*;

/// Tests updating only some profile fields.
///
/// Verifies that fields absent from the DTO keep their current values.
///
/// Expected: Ok with bio updated and nickname unchanged
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .nickname("DungeonMaster")
        .bio("Old bio")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user,
            UpdateUserDto {
                nickname: None,
                bio: Some("New bio".to_string()),
                preference: None,
                disponibility: None,
            },
        )
        .await?;

    assert_eq!(updated.nickname, "DungeonMaster");
    assert_eq!(updated.bio.as_deref(), Some("New bio"));

    Ok(())
}

/// Tests updating the nickname.
///
/// Expected: Ok with nickname replaced
#[tokio::test]
async fn updates_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user,
            UpdateUserDto {
                nickname: Some("NewName".to_string()),
                bio: None,
                preference: None,
                disponibility: None,
            },
        )
        .await?;

    assert_eq!(updated.nickname, "NewName");

    Ok(())
}
