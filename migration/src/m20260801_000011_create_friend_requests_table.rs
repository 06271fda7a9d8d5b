use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FriendRequests::Table)
                    .if_not_exists()
                    .col(pk_uuid(FriendRequests::Id))
                    .col(uuid(FriendRequests::SenderId))
                    .col(uuid(FriendRequests::ReceiverId))
                    .col(string(FriendRequests::Status))
                    .col(timestamp_with_time_zone(FriendRequests::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_requests_sender_id")
                            .from(FriendRequests::Table, FriendRequests::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_requests_receiver_id")
                            .from(FriendRequests::Table, FriendRequests::ReceiverId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FriendRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FriendRequests {
    Table,
    Id,
    SenderId,
    ReceiverId,
    Status,
    CreatedAt,
}
