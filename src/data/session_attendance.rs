//! Session attendance data repository.
//!
//! One row per (user, session). `confirm_assist` starts null (pending) and is
//! set to true on confirm, false on decline, back to null on reset.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Repository providing database operations for session attendance marks.
pub struct SessionAttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionAttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the attendance row with the given mark.
    ///
    /// Used by confirm, where a missing row is created rather than rejected.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        session_id: Uuid,
        confirm_assist: Option<bool>,
    ) -> Result<entity::session_attendance::Model, DbErr> {
        entity::prelude::SessionAttendance::insert(entity::session_attendance::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            session_id: ActiveValue::Set(session_id),
            confirm_assist: ActiveValue::Set(confirm_assist),
        })
        .on_conflict(
            OnConflict::columns([
                entity::session_attendance::Column::UserId,
                entity::session_attendance::Column::SessionId,
            ])
            .update_column(entity::session_attendance::Column::ConfirmAssist)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find(
        &self,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<Option<entity::session_attendance::Model>, DbErr> {
        entity::prelude::SessionAttendance::find_by_id((user_id, session_id))
            .one(self.db)
            .await
    }

    /// Updates the mark on an existing row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row existed and was updated
    /// - `Ok(false)` - No attendance row for this (user, session)
    pub async fn update_mark(
        &self,
        user_id: Uuid,
        session_id: Uuid,
        confirm_assist: Option<bool>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::SessionAttendance::update_many()
            .filter(entity::session_attendance::Column::UserId.eq(user_id))
            .filter(entity::session_attendance::Column::SessionId.eq(session_id))
            .col_expr(
                entity::session_attendance::Column::ConfirmAssist,
                Expr::value(confirm_assist),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all attendance rows of a session with the member profile attached.
    pub async fn find_by_session(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<(entity::session_attendance::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::SessionAttendance::find()
            .filter(entity::session_attendance::Column::SessionId.eq(session_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }
}
