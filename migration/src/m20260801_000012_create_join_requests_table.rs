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
                    .table(JoinRequests::Table)
                    .if_not_exists()
                    .col(pk_uuid(JoinRequests::Id))
                    .col(uuid(JoinRequests::UserId))
                    .col(uuid(JoinRequests::GameId))
                    .col(text_null(JoinRequests::Message))
                    .col(string(JoinRequests::Status))
                    .col(timestamp_with_time_zone(JoinRequests::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_requests_user_id")
                            .from(JoinRequests::Table, JoinRequests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_requests_game_id")
                            .from(JoinRequests::Table, JoinRequests::GameId)
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
            .drop_table(Table::drop().table(JoinRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JoinRequests {
    Table,
    Id,
    UserId,
    GameId,
    Message,
    Status,
    CreatedAt,
}
