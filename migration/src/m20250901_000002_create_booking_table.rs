use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string(Booking::Name))
                    .col(string_null(Booking::Email))
                    .col(string(Booking::Phone))
                    .col(string(Booking::PackageType))
                    .col(integer(Booking::PackageDuration))
                    .col(date(Booking::CheckIn))
                    .col(date(Booking::CheckOut))
                    .col(integer(Booking::GuestCount).default(1))
                    .col(integer(Booking::RoomNumber))
                    .col(double(Booking::PackagePrice))
                    .col(double(Booking::Discount).default(0.0))
                    .col(double(Booking::TotalPrice))
                    .col(string(Booking::PaymentStatus).default("Pending"))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_stay")
                    .table(Booking::Table)
                    .col(Booking::RoomNumber)
                    .col(Booking::CheckIn)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    Name,
    Email,
    Phone,
    PackageType,
    PackageDuration,
    CheckIn,
    CheckOut,
    GuestCount,
    RoomNumber,
    PackagePrice,
    Discount,
    TotalPrice,
    PaymentStatus,
    CreatedAt,
}
