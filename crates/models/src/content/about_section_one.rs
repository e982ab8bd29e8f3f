use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::publish::Publishable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "about_section_one")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub heading: Option<String>,
    /// May contain HTML.
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub image: Option<String>,
    pub alt_text: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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
    fn order_column() -> Option<Column> {
        Some(Column::Order)
    }
    fn created_column() -> Column {
        Column::CreatedAt
    }
}
