use crate::data::character_sheet::CharacterSheetRepository;
use crate::model::character_sheet::{CreateCharacterSheetDto, UpdateCharacterSheetDto};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod find_by_game;
mod set_photo;
mod update;
