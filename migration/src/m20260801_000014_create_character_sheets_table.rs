use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_users_table::Users;
use super::m20260801_000003_create_games_table::Games;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterSheets::Table)
                    .if_not_exists()
                    .col(pk_uuid(CharacterSheets::Id))
                    .col(uuid(CharacterSheets::UserId))
                    .col(uuid(CharacterSheets::GameId))
                    .col(string(CharacterSheets::Name))
                    .col(string_null(CharacterSheets::Role))
                    .col(text_null(CharacterSheets::Description))
                    .col(integer_null(CharacterSheets::Level))
                    .col(string_null(CharacterSheets::CharacterPhoto))
                    .col(timestamp_with_time_zone(CharacterSheets::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_sheets_user_id")
                            .from(CharacterSheets::Table, CharacterSheets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_sheets_game_id")
                            .from(CharacterSheets::Table, CharacterSheets::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharacterSheets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacterSheets {
    Table,
    Id,
    UserId,
    GameId,
    Name,
    Role,
    Description,
    Level,
    CharacterPhoto,
    CreatedAt,
}
