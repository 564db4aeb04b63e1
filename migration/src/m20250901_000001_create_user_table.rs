use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string(User::Country))
                    .col(date_null(User::Dob))
                    .col(string(User::Gender))
                    .col(string(User::Phone))
                    .col(string_uniq(User::Email))
                    .col(string(User::Password))
                    .col(boolean(User::AgreeTerms).default(false))
                    .col(string(User::Role).default("user"))
                    .col(string(User::ProfilePicture).default(""))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Country,
    Dob,
    Gender,
    Phone,
    Email,
    Password,
    AgreeTerms,
    Role,
    ProfilePicture,
    CreatedAt,
}
