use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParams, UpdateReviewParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_product;
mod get_latest_five_star;
mod update;
