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
                    .table(PrivateMessages::Table)
                    .if_not_exists()
                    .col(pk_uuid(PrivateMessages::Id))
                    .col(uuid(PrivateMessages::SenderId))
                    .col(uuid(PrivateMessages::ReceiverId))
                    .col(text_null(PrivateMessages::Content))
                    .col(string_null(PrivateMessages::ImageUrl))
                    .col(timestamp_with_time_zone(PrivateMessages::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_private_messages_sender_id")
                            .from(PrivateMessages::Table, PrivateMessages::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_private_messages_receiver_id")
                            .from(PrivateMessages::Table, PrivateMessages::ReceiverId)
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
            .drop_table(Table::drop().table(PrivateMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PrivateMessages {
    Table,
    Id,
    SenderId,
    ReceiverId,
    Content,
    ImageUrl,
    CreatedAt,
}
