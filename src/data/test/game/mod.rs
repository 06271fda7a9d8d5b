use crate::data::game::GameRepository;
use crate::model::game::{CreateGameDto, UpdateGameDto};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod find_active_for_user;
mod find_public;
mod soft_delete;
mod update;
