#[cfg(test)]
mod test;

pub mod auth_admin;
pub mod character_sheet;
pub mod event;
pub mod friend_request;
pub mod game;
pub mod join_request;
pub mod message;
pub mod notification;
pub mod private_message;
pub mod session;
pub mod storage;
pub mod theme;
pub mod user;
