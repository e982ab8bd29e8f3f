use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::publish::Publishable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hero_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub button_text: String,
    pub trapezoid_image: String,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    BikeImages,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::BikeImages => Entity::has_many(super::hero_bike_image::Entity).into(),
        }
    }
}

impl Related<super::hero_bike_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BikeImages.def()
    }
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
