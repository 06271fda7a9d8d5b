use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Game};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Game)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should
    /// be added in dependency order (tables with foreign keys after their referenced
    /// tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for game membership operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Theme
    /// - Game
    /// - Subscription
    ///
    /// Use this for tests touching games and their members. For schedule or
    /// chat tests, use `with_schedule_tables()` or `with_chat_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_game_tables(self) -> Self {
        self.with_table(User)
            .with_table(Theme)
            .with_table(Game)
            .with_table(Subscription)
    }

    /// Adds all tables required for session and event scheduling.
    ///
    /// Equivalent to `with_game_tables()` plus:
    /// - Session / SessionAttendance
    /// - Event / EventAttendance
    /// - Notification (session creation notifies members)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_schedule_tables(self) -> Self {
        self.with_game_tables()
            .with_table(Session)
            .with_table(SessionAttendance)
            .with_table(Event)
            .with_table(EventAttendance)
            .with_table(Notification)
    }

    /// Adds all tables required for game chat operations.
    ///
    /// Equivalent to `with_game_tables()` plus Message and Notification.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_chat_tables(self) -> Self {
        self.with_game_tables()
            .with_table(Message)
            .with_table(Notification)
    }

    /// Adds all tables required for friendships and direct messaging.
    ///
    /// Adds User, FriendRequest, PrivateMessage and Notification.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_social_tables(self) -> Self {
        self.with_table(User)
            .with_table(FriendRequest)
            .with_table(PrivateMessage)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
