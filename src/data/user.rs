//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user profile records.
//! User primary keys come from the auth provider's subject claim, so creation
//! never generates a local id.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::model::user::{RegisterUserDto, UpdateUserDto};

/// Repository providing database operations for user profiles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user profile.
    ///
    /// # Arguments
    /// - `id` - Auth provider subject UUID, used as the primary key
    /// - `email` - Email from the verified token
    /// - `dto` - Profile fields chosen by the user
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email or nickname
    pub async fn create(
        &self,
        id: Uuid,
        email: String,
        dto: RegisterUserDto,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            email: ActiveValue::Set(email),
            nickname: ActiveValue::Set(dto.nickname),
            bio: ActiveValue::Set(dto.bio),
            preference: ActiveValue::Set(dto.preference),
            disponibility: ActiveValue::Set(dto.disponibility),
            profile_photo: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by their UUID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether a nickname is already taken by a different user.
    ///
    /// # Arguments
    /// - `nickname` - Nickname to check
    /// - `exclude_id` - User allowed to keep the nickname (the caller, on updates)
    pub async fn nickname_taken(
        &self,
        nickname: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial profile update.
    ///
    /// Only fields present in the DTO are written; absent fields keep their
    /// current values.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        dto: UpdateUserDto,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();

        if let Some(nickname) = dto.nickname {
            active.nickname = ActiveValue::Set(nickname);
        }
        if let Some(bio) = dto.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(preference) = dto.preference {
            active.preference = ActiveValue::Set(Some(preference));
        }
        if let Some(disponibility) = dto.disponibility {
            active.disponibility = ActiveValue::Set(Some(disponibility));
        }

        active.update(self.db).await
    }

    /// Sets or clears the stored profile photo path.
    pub async fn set_profile_photo(
        &self,
        user_id: Uuid,
        photo_path: Option<String>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::ProfilePhoto,
                sea_orm::sea_query::Expr::value(photo_path),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a user profile. Dependent rows cascade at the database level.
    pub async fn delete(&self, user: entity::user::Model) -> Result<(), DbErr> {
        user.delete(self.db).await?;
        Ok(())
    }
}
