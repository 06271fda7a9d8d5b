//! Session service for scheduling and attendance logic.

use chrono::{TimeZone, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        game::GameRepository, notification::NotificationRepository,
        session::SessionRepository, session_attendance::SessionAttendanceRepository,
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::{
        notification::TYPE_SESSION_CREATED,
        session::{AttendeeDto, CreateSessionDto, SessionDto, UpdateSessionDto},
    },
};

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a session and notifies every other active member.
    ///
    /// Notifications reference the new session so clients can deep-link.
    pub async fn create(
        &self,
        creator_id: Uuid,
        game_id: Uuid,
        dto: CreateSessionDto,
    ) -> Result<SessionDto, AppError> {
        let game_repo = GameRepository::new(self.db);

        let Some(game) = game_repo.find_active_by_id(game_id).await? else {
            return Err(AppError::NotFound("Game not found".to_string()));
        };

        let session_repo = SessionRepository::new(self.db);
        let session = session_repo.create(game_id, dto).await?;

        let subscription_repo = SubscriptionRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);
        let members = subscription_repo.find_active_by_game(game_id).await?;

        for (subscription, _) in members {
            if subscription.user_id == creator_id {
                continue;
            }
            notification_repo
                .create(
                    subscription.user_id,
                    TYPE_SESSION_CREATED,
                    format!("A new session was scheduled in {}", game.name),
                    Some(session.id),
                )
                .await?;
        }

        Ok(SessionDto::from_entity(session))
    }

    /// Lists a game's sessions in chronological order.
    pub async fn list(&self, game_id: Uuid) -> Result<Vec<SessionDto>, AppError> {
        let repo = SessionRepository::new(self.db);
        let sessions = repo.find_by_game(game_id).await?;

        Ok(sessions.into_iter().map(SessionDto::from_entity).collect())
    }

    /// Gets one session, scoped to the game it belongs to.
    pub async fn get(&self, game_id: Uuid, session_id: Uuid) -> Result<SessionDto, AppError> {
        let session = self.find_in_game(game_id, session_id).await?;
        Ok(SessionDto::from_entity(session))
    }

    /// Applies a partial update to a session.
    pub async fn update(
        &self,
        game_id: Uuid,
        session_id: Uuid,
        dto: UpdateSessionDto,
    ) -> Result<SessionDto, AppError> {
        let session = self.find_in_game(game_id, session_id).await?;

        let repo = SessionRepository::new(self.db);
        let updated = repo.update(session, dto).await?;

        Ok(SessionDto::from_entity(updated))
    }

    /// Deletes a session and its attendance rows (cascade).
    pub async fn delete(&self, game_id: Uuid, session_id: Uuid) -> Result<(), AppError> {
        let session = self.find_in_game(game_id, session_id).await?;

        let repo = SessionRepository::new(self.db);
        repo.delete(session).await?;

        Ok(())
    }

    /// Marks the caller as attending. Creates the row if missing.
    pub async fn confirm_attendance(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        session_id: Uuid,
    ) -> Result<(), AppError> {
        self.find_in_game(game_id, session_id).await?;

        let repo = SessionAttendanceRepository::new(self.db);
        repo.upsert(user_id, session_id, Some(true)).await?;

        Ok(())
    }

    /// Marks the caller as not attending.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Caller never responded to this session
    pub async fn decline_attendance(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        session_id: Uuid,
    ) -> Result<(), AppError> {
        self.find_in_game(game_id, session_id).await?;

        let repo = SessionAttendanceRepository::new(self.db);
        if !repo.update_mark(user_id, session_id, Some(false)).await? {
            return Err(AppError::NotFound(
                "No attendance response for this session".to_string(),
            ));
        }

        Ok(())
    }

    /// Resets the caller's response back to pending.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Caller never responded to this session
    pub async fn reset_attendance(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        session_id: Uuid,
    ) -> Result<(), AppError> {
        self.find_in_game(game_id, session_id).await?;

        let repo = SessionAttendanceRepository::new(self.db);
        if !repo.update_mark(user_id, session_id, None).await? {
            return Err(AppError::NotFound(
                "No attendance response for this session".to_string(),
            ));
        }

        Ok(())
    }

    /// Lists everyone who responded to a session with their current mark.
    pub async fn attendees(
        &self,
        game_id: Uuid,
        session_id: Uuid,
    ) -> Result<Vec<AttendeeDto>, AppError> {
        self.find_in_game(game_id, session_id).await?;

        let repo = SessionAttendanceRepository::new(self.db);
        let rows = repo.find_by_session(session_id).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(attendance, user)| {
                user.map(|user| AttendeeDto {
                    user_id: user.id,
                    nickname: user.nickname,
                    confirm_assist: attendance.confirm_assist,
                })
            })
            .collect())
    }

    /// Gets the caller's agenda for a calendar month across all their games.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Month outside 1..=12
    pub async fn my_month(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
    ) -> Result<Vec<SessionDto>, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::BadRequest("Invalid month".to_string()));
        }

        let start = Utc
            .with_ymd_and_hms(year, month, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| AppError::BadRequest("Invalid year or month".to_string()))?;

        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = Utc
            .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| AppError::BadRequest("Invalid year or month".to_string()))?;

        let repo = SessionRepository::new(self.db);
        let sessions = repo.find_for_user_in_range(user_id, start, end).await?;

        Ok(sessions.into_iter().map(SessionDto::from_entity).collect())
    }

    async fn find_in_game(
        &self,
        game_id: Uuid,
        session_id: Uuid,
    ) -> Result<entity::session::Model, AppError> {
        let repo = SessionRepository::new(self.db);

        match repo.find_by_id(session_id).await? {
            Some(session) if session.game_id == game_id => Ok(session),
            _ => Err(AppError::NotFound("Session not found".to_string())),
        }
    }
}
