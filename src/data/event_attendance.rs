//! Event attendance data repository.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Repository providing database operations for event attendance marks.
pub struct EventAttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventAttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the attendance row with the given mark.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        confirm_assist: Option<bool>,
    ) -> Result<entity::event_attendance::Model, DbErr> {
        entity::prelude::EventAttendance::insert(entity::event_attendance::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            event_id: ActiveValue::Set(event_id),
            confirm_assist: ActiveValue::Set(confirm_assist),
        })
        .on_conflict(
            OnConflict::columns([
                entity::event_attendance::Column::UserId,
                entity::event_attendance::Column::EventId,
            ])
            .update_column(entity::event_attendance::Column::ConfirmAssist)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<entity::event_attendance::Model>, DbErr> {
        entity::prelude::EventAttendance::find_by_id((user_id, event_id))
            .one(self.db)
            .await
    }

    /// Updates the mark on an existing row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row existed and was updated
    /// - `Ok(false)` - No attendance row for this (user, event)
    pub async fn update_mark(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        confirm_assist: Option<bool>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::EventAttendance::update_many()
            .filter(entity::event_attendance::Column::UserId.eq(user_id))
            .filter(entity::event_attendance::Column::EventId.eq(event_id))
            .col_expr(
                entity::event_attendance::Column::ConfirmAssist,
                Expr::value(confirm_assist),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all attendance rows of an event with the member profile attached.
    pub async fn find_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<(entity::event_attendance::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::EventAttendance::find()
            .filter(entity::event_attendance::Column::EventId.eq(event_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }
}
