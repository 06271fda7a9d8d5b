use crate::data::private_message::PrivateMessageRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod delete_conversation;
mod find_all_for_user;
mod find_conversation_paginated;
