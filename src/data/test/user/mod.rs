use crate::data::user::UserRepository;
use crate::model::user::{RegisterUserDto, UpdateUserDto};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;
use uuid::Uuid;

mod create;
mod delete;
mod find_by_email;
mod nickname_taken;
mod set_profile_photo;
mod update_profile;
