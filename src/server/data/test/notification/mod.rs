use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{CreateNotificationParams, UpdateNotificationParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_reader;
mod create;
mod delete;
mod list_for_user;
mod update;
