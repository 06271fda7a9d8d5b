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
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_uuid(Events::Id))
                    .col(uuid(Events::GameId))
                    .col(string(Events::Name))
                    .col(boolean_null(Events::IsPresential))
                    .col(timestamp_with_time_zone_null(Events::Datetime))
                    .col(string_null(Events::Place))
                    .col(text_null(Events::Observations))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_game_id")
                            .from(Events::Table, Events::GameId)
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
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    GameId,
    Name,
    IsPresential,
    Datetime,
    Place,
    Observations,
}
