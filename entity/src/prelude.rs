pub use super::character_sheet::Entity as CharacterSheet;
pub use super::event::Entity as Event;
pub use super::event_attendance::Entity as EventAttendance;
pub use super::friend_request::Entity as FriendRequest;
pub use super::game::Entity as Game;
pub use super::join_request::Entity as JoinRequest;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::private_message::Entity as PrivateMessage;
pub use super::session::Entity as Session;
pub use super::session_attendance::Entity as SessionAttendance;
pub use super::subscription::Entity as Subscription;
pub use super::theme::Entity as Theme;
pub use super::user::Entity as User;
