use crate::data::notification::NotificationRepository;
use crate::model::notification::{TYPE_SESSION_CREATED, TYPE_UNREAD_MESSAGES};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;
use uuid::Uuid;

mod count_unread;
mod create;
mod find_by_user_paginated;
mod mark_read;
mod mark_read_by_reference;
mod unread_exists;
