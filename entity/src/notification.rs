use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// `None` marks a broadcast notification.
    pub user_id: Option<i32>,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub visible: bool,
    pub metadata: Option<Json>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::notification_read::Entity")]
    NotificationRead,
}

impl Related<super::notification_read::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotificationRead.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
