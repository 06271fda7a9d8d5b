pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users_table;
mod m20260801_000002_create_themes_table;
mod m20260801_000003_create_games_table;
mod m20260801_000004_create_subscriptions_table;
mod m20260801_000005_create_sessions_table;
mod m20260801_000006_create_users_sessions_table;
mod m20260801_000007_create_events_table;
mod m20260801_000008_create_users_events_table;
mod m20260801_000009_create_messages_table;
mod m20260801_000010_create_private_messages_table;
mod m20260801_000011_create_friend_requests_table;
mod m20260801_000012_create_join_requests_table;
mod m20260801_000013_create_notifications_table;
mod m20260801_000014_create_character_sheets_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users_table::Migration),
            Box::new(m20260801_000002_create_themes_table::Migration),
            Box::new(m20260801_000003_create_games_table::Migration),
            Box::new(m20260801_000004_create_subscriptions_table::Migration),
            Box::new(m20260801_000005_create_sessions_table::Migration),
            Box::new(m20260801_000006_create_users_sessions_table::Migration),
            Box::new(m20260801_000007_create_events_table::Migration),
            Box::new(m20260801_000008_create_users_events_table::Migration),
            Box::new(m20260801_000009_create_messages_table::Migration),
            Box::new(m20260801_000010_create_private_messages_table::Migration),
            Box::new(m20260801_000011_create_friend_requests_table::Migration),
            Box::new(m20260801_000012_create_join_requests_table::Migration),
            Box::new(m20260801_000013_create_notifications_table::Migration),
            Box::new(m20260801_000014_create_character_sheets_table::Migration),
        ]
    }
}
