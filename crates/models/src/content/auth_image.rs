use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::publish::Publishable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "auth_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: Option<String>,
    pub image: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

impl Publishable for Entity {
    fn active_column() -> Option<Column> {
        Some(Column::IsActive)
    }
    fn created_column() -> Column {
        Column::CreatedAt
    }
}
