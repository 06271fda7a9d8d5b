use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_themes_table::Themes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(pk_uuid(Games::Id))
                    .col(string(Games::Name))
                    .col(text_null(Games::Description))
                    .col(string_null(Games::GamePhoto))
                    .col(small_integer_null(Games::MaxPlayers))
                    .col(boolean(Games::IsPublic).default(true))
                    .col(boolean(Games::IsDeleted).default(false))
                    .col(uuid_null(Games::ThemeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_theme_id")
                            .from(Games::Table, Games::ThemeId)
                            .to(Themes::Table, Themes::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Games {
    Table,
    Id,
    Name,
    Description,
    GamePhoto,
    MaxPlayers,
    IsPublic,
    IsDeleted,
    ThemeId,
}
