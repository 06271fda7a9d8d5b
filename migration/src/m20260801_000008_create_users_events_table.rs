use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_users_table::Users;
use super::m20260801_000007_create_events_table::Events;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsersEvents::Table)
                    .if_not_exists()
                    .col(uuid(UsersEvents::UserId))
                    .col(uuid(UsersEvents::EventId))
                    .col(boolean_null(UsersEvents::ConfirmAssist))
                    .primary_key(
                        Index::create()
                            .col(UsersEvents::UserId)
                            .col(UsersEvents::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_events_user_id")
                            .from(UsersEvents::Table, UsersEvents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_events_event_id")
                            .from(UsersEvents::Table, UsersEvents::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsersEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UsersEvents {
    Table,
    UserId,
    EventId,
    ConfirmAssist,
}
