//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Factories automatically handle
//! dependencies and foreign key relationships, making tests more concise and
//! maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let game = factory::game::create_game(&db).await?;
//!
//!     // Create a game together with its owner subscription
//!     let (owner, game, subscription) =
//!         factory::helpers::create_game_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .name("Curse of Strahd")
//!     .is_public(false)
//!     .max_players(5)
//!     .build()
//!     .await?;
//! ```

pub mod character_sheet;
pub mod event;
pub mod friend_request;
pub mod game;
pub mod helpers;
pub mod join_request;
pub mod message;
pub mod notification;
pub mod private_message;
pub mod session;
pub mod subscription;
pub mod theme;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use character_sheet::create_character_sheet;
pub use event::create_event;
pub use friend_request::{create_friend_request, create_friendship};
pub use game::create_game;
pub use join_request::create_join_request;
pub use message::create_message;
pub use notification::create_notification;
pub use private_message::create_private_message;
pub use session::create_session;
pub use subscription::{create_owner_subscription, create_subscription};
pub use theme::create_theme;
pub use user::create_user;
