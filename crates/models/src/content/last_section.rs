use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::publish::Publishable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "last_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub heading: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub subtitle: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Images,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Images => Entity::has_many(super::last_section_image::Entity).into(),
        }
    }
}

impl Related<super::last_section_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Publishable for Entity {
    fn created_column() -> Column {
        Column::CreatedAt
    }
}
