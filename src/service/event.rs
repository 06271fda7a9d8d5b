//! Event service. Same shape as sessions without creation notifications
//! and without the reset-attendance transition.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        event::EventRepository, event_attendance::EventAttendanceRepository,
        game::GameRepository,
    },
    error::AppError,
    model::{
        event::{CreateEventDto, EventDto, UpdateEventDto},
        session::AttendeeDto,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        game_id: Uuid,
        dto: CreateEventDto,
    ) -> Result<EventDto, AppError> {
        let game_repo = GameRepository::new(self.db);

        if game_repo.find_active_by_id(game_id).await?.is_none() {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        let repo = EventRepository::new(self.db);
        let event = repo.create(game_id, dto).await?;

        Ok(EventDto::from_entity(event))
    }

    /// Lists a game's events in chronological order.
    pub async fn list(&self, game_id: Uuid) -> Result<Vec<EventDto>, AppError> {
        let repo = EventRepository::new(self.db);
        let events = repo.find_by_game(game_id).await?;

        Ok(events.into_iter().map(EventDto::from_entity).collect())
    }

    pub async fn get(&self, game_id: Uuid, event_id: Uuid) -> Result<EventDto, AppError> {
        let event = self.find_in_game(game_id, event_id).await?;
        Ok(EventDto::from_entity(event))
    }

    pub async fn update(
        &self,
        game_id: Uuid,
        event_id: Uuid,
        dto: UpdateEventDto,
    ) -> Result<EventDto, AppError> {
        let event = self.find_in_game(game_id, event_id).await?;

        let repo = EventRepository::new(self.db);
        let updated = repo.update(event, dto).await?;

        Ok(EventDto::from_entity(updated))
    }

    pub async fn delete(&self, game_id: Uuid, event_id: Uuid) -> Result<(), AppError> {
        let event = self.find_in_game(game_id, event_id).await?;

        let repo = EventRepository::new(self.db);
        repo.delete(event).await?;

        Ok(())
    }

    /// Marks the caller as attending. Creates the row if missing.
    pub async fn confirm_attendance(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), AppError> {
        self.find_in_game(game_id, event_id).await?;

        let repo = EventAttendanceRepository::new(self.db);
        repo.upsert(user_id, event_id, Some(true)).await?;

        Ok(())
    }

    /// Marks the caller as not attending.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Caller never responded to this event
    pub async fn decline_attendance(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        event_id: Uuid,
    ) -> Result<(), AppError> {
        self.find_in_game(game_id, event_id).await?;

        let repo = EventAttendanceRepository::new(self.db);
        if !repo.update_mark(user_id, event_id, Some(false)).await? {
            return Err(AppError::NotFound(
                "No attendance response for this event".to_string(),
            ));
        }

        Ok(())
    }

    /// Lists everyone who responded to an event with their current mark.
    pub async fn attendees(
        &self,
        game_id: Uuid,
        event_id: Uuid,
    ) -> Result<Vec<AttendeeDto>, AppError> {
        self.find_in_game(game_id, event_id).await?;

        let repo = EventAttendanceRepository::new(self.db);
        let rows = repo.find_by_event(event_id).await?;

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

    async fn find_in_game(
        &self,
        game_id: Uuid,
        event_id: Uuid,
    ) -> Result<entity::event::Model, AppError> {
        let repo = EventRepository::new(self.db);

        match repo.find_by_id(event_id).await? {
            Some(event) if event.game_id == game_id => Ok(event),
            _ => Err(AppError::NotFound("Event not found".to_string())),
        }
    }
}
