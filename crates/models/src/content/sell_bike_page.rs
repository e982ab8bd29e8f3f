use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::publish::Publishable;

/// The `*_options` columns hold comma separated dropdown values.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sell_bike_page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub top_banner_image: String,
    #[sea_orm(column_type = "Text")]
    pub top_banner_text: String,
    pub second_banner_image: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub second_banner_top_text: Option<String>,
    pub second_banner_bottom_text: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub brand_options: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub model_options: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub variant_options: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub year_options: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub kms_options: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub owner_options: Option<String>,
    pub third_title: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    HowItWorks,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::HowItWorks => Entity::has_many(super::how_it_works::Entity).into(),
        }
    }
}

impl Related<super::how_it_works::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HowItWorks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Publishable for Entity {
    fn created_column() -> Column {
        Column::CreatedAt
    }
}
