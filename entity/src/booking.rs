use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub package_type: String,
    pub package_duration: i32,
    pub check_in: Date,
    pub check_out: Date,
    pub guest_count: i32,
    pub room_number: i32,
    pub package_price: f64,
    pub discount: f64,
    pub total_price: f64,
    pub payment_status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
