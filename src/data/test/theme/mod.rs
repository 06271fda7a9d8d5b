use crate::data::theme::ThemeRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod find_by_name_contains;
mod get_all;
