use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000003_create_games_table::Games;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(pk_uuid(Sessions::Id))
                    .col(uuid(Sessions::GameId))
                    .col(string(Sessions::Name))
                    .col(boolean_null(Sessions::IsPresential))
                    .col(timestamp_with_time_zone_null(Sessions::Datetime))
                    .col(string_null(Sessions::Place))
                    .col(text_null(Sessions::Observations))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_game_id")
                            .from(Sessions::Table, Sessions::GameId)
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
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sessions {
    Table,
    Id,
    GameId,
    Name,
    IsPresential,
    Datetime,
    Place,
    Observations,
}
