//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game together with its owning user.
///
/// This is a convenience method that creates:
/// 1. User (as table owner)
/// 2. Game
/// 3. Owner subscription linking the two
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, game, subscription))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_owner(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::game::Model,
        entity::subscription::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let game = crate::factory::game::create_game(db).await?;
    let subscription =
        crate::factory::subscription::create_owner_subscription(db, user.id, game.id).await?;

    Ok((user, game, subscription))
}

/// Creates a game owned by a specific user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User entity to use as table owner
///
/// # Returns
/// - `Ok((game, subscription))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<(entity::game::Model, entity::subscription::Model), DbErr> {
    let game = crate::factory::game::create_game(db).await?;
    let subscription =
        crate::factory::subscription::create_owner_subscription(db, user.id, game.id).await?;

    Ok((game, subscription))
}
