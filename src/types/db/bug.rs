use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bugs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub reported_by: String,

    // Stored as the wire strings ("open", "in-progress", ...)
    #[sea_orm(default_value = "open")]
    pub status: String,
    #[sea_orm(default_value = "medium")]
    pub priority: String,
    #[sea_orm(default_value = "Unassigned")]
    pub assigned_to: String,

    // Unix epoch milliseconds
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
