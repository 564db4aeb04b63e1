use sea_orm_migration::{prelude::*, schema::*};

use super::m20250903_000005_create_notification_table::Notification;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationRead::Table)
                    .if_not_exists()
                    .col(integer(NotificationRead::NotificationId))
                    .col(integer(NotificationRead::UserId))
                    .primary_key(
                        Index::create()
                            .col(NotificationRead::NotificationId)
                            .col(NotificationRead::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_read_notification_id")
                            .from(NotificationRead::Table, NotificationRead::NotificationId)
                            .to(Notification::Table, Notification::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationRead::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationRead {
    Table,
    NotificationId,
    UserId,
}
