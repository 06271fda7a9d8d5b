use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_users_table::Users;
use super::m20260801_000005_create_sessions_table::Sessions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsersSessions::Table)
                    .if_not_exists()
                    .col(uuid(UsersSessions::UserId))
                    .col(uuid(UsersSessions::SessionId))
                    .col(boolean_null(UsersSessions::ConfirmAssist))
                    .primary_key(
                        Index::create()
                            .col(UsersSessions::UserId)
                            .col(UsersSessions::SessionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_sessions_user_id")
                            .from(UsersSessions::Table, UsersSessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_sessions_session_id")
                            .from(UsersSessions::Table, UsersSessions::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsersSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UsersSessions {
    Table,
    UserId,
    SessionId,
    ConfirmAssist,
}
