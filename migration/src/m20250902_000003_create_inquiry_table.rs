use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiry::Table)
                    .if_not_exists()
                    .col(pk_auto(Inquiry::Id))
                    .col(string_uniq(Inquiry::InquiryCode))
                    .col(integer_null(Inquiry::UserId))
                    .col(string(Inquiry::Name).default(""))
                    .col(string(Inquiry::Email).default(""))
                    .col(string(Inquiry::Phone).default(""))
                    .col(string(Inquiry::Kind).default("general"))
                    .col(text(Inquiry::Description))
                    .col(string(Inquiry::Status).default("pending"))
                    .col(string(Inquiry::Priority).default("medium"))
                    .col(text(Inquiry::Response).default(""))
                    .col(
                        timestamp_with_time_zone(Inquiry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Inquiry::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inquiry_user_id")
                    .table(Inquiry::Table)
                    .col(Inquiry::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inquiry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inquiry {
    Table,
    Id,
    InquiryCode,
    UserId,
    Name,
    Email,
    Phone,
    Kind,
    Description,
    Status,
    Priority,
    Response,
    CreatedAt,
    UpdatedAt,
}
