use crate::{
    model::inquiry::{InquiryKind, InquiryPriority, InquiryStatus},
    server::{
        data::inquiry::InquiryRepository,
        model::inquiry::{CreateInquiryParams, InquiryChanges},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user;
mod next_code;
mod update;

fn params(user_id: Option<i32>) -> CreateInquiryParams {
    CreateInquiryParams {
        user_id,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: String::new(),
        kind: InquiryKind::Product,
        description: "Is the massage oil vegan?".to_string(),
        status: InquiryStatus::Pending,
        priority: InquiryPriority::Medium,
        response: String::new(),
    }
}
