use crate::data::session_attendance::SessionAttendanceRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod find_by_session;
mod update_mark;
mod upsert;
