use super::*;

/// Tests listing all themes.
///
/// Verifies that themes come back sorted by name regardless of insertion
/// order.
///
/// Expected: Ok with all themes sorted alphabetically
#[tokio::test]
async fn returns_themes_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::theme::ThemeFactory::new(db)
        .name("Horror")
        .build()
        .await?;
    factory::theme::ThemeFactory::new(db)
        .name("Cyberpunk")
        .build()
        .await?;
    factory::theme::ThemeFactory::new(db)
        .name("Fantasy")
        .build()
        .await?;

    let repo = ThemeRepository::new(db);
    let themes = repo.get_all().await?;

    assert_eq!(themes.len(), 3);
    assert_eq!(themes[0].name, "Cyberpunk");
    assert_eq!(themes[1].name, "Fantasy");
    assert_eq!(themes[2].name, "Horror");

    Ok(())
}

/// Tests listing themes when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_themes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ThemeRepository::new(db);
    let themes = repo.get_all().await?;

    assert!(themes.is_empty());

    Ok(())
}
