use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::publish::Publishable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "about_section2")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub background_image: String,
    pub overlay_title: String,
    #[sea_orm(column_type = "Text")]
    pub overlay_text: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

impl Publishable for Entity {
    fn created_column() -> Column {
        Column::CreatedAt
    }
}
