use super::*;

/// Tests theme search matching is case insensitive.
///
/// Expected: Ok with themes matching the fragment in any casing
#[tokio::test]
async fn matches_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::theme::ThemeFactory::new(db)
        .name("Dark Fantasy")
        .build()
        .await?;
    factory::theme::ThemeFactory::new(db)
        .name("Space Opera")
        .build()
        .await?;

    let repo = ThemeRepository::new(db);
    let themes = repo.find_by_name_contains("FANTASY").await?;

    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].name, "Dark Fantasy");

    Ok(())
}

/// Tests theme search with no matching names.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::theme::ThemeFactory::new(db)
        .name("Space Opera")
        .build()
        .await?;

    let repo = ThemeRepository::new(db);
    let themes = repo.find_by_name_contains("western").await?;

    assert!(themes.is_empty());

    Ok(())
}
