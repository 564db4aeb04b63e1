pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_booking_table;
mod m20250902_000003_create_inquiry_table;
mod m20250902_000004_create_review_table;
mod m20250903_000005_create_notification_table;
mod m20250903_000006_create_notification_read_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_booking_table::Migration),
            Box::new(m20250902_000003_create_inquiry_table::Migration),
            Box::new(m20250902_000004_create_review_table::Migration),
            Box::new(m20250903_000005_create_notification_table::Migration),
            Box::new(m20250903_000006_create_notification_read_table::Migration),
        ]
    }
}
