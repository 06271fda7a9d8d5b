use crate::data::friend_request::FriendRequestRepository;
use crate::model::friend_request::{STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod find_accepted_for_user;
mod find_between;
mod find_pending_received;
mod update_status;
