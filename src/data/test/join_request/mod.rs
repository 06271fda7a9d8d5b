use crate::data::join_request::JoinRequestRepository;
use crate::model::friend_request::{STATUS_ACCEPTED, STATUS_PENDING};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod find_pending_by_game;
mod find_pending_by_user_and_game;
mod update_status;
