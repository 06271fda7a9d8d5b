use crate::data::subscription::SubscriptionRepository;
use crate::model::subscription::{ROLE_OWNER, ROLE_PLAYER};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod count_active_by_game;
mod create;
mod find_active_by_game;
mod find_by_user_and_game;
mod set_active;
