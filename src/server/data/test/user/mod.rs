use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        model::user::{SignupParams, UserChanges},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod update;

fn signup(email: &str) -> SignupParams {
    SignupParams {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        country: "USA".to_string(),
        dob: None,
        gender: "female".to_string(),
        phone: "0771234567".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
        agree_terms: true,
        role: UserRole::User,
        profile_picture: String::new(),
    }
}

