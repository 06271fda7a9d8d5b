use crate::data::session::SessionRepository;
use crate::model::session::{CreateSessionDto, UpdateSessionDto};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod delete;
mod find_by_game;
mod find_for_user_in_range;
mod update;
