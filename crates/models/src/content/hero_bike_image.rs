use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hero_bike_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hero_section_id: i32,
    pub image: String,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    HeroSection,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::HeroSection => Entity::belongs_to(super::hero_section::Entity)
                .from(Column::HeroSectionId)
                .to(super::hero_section::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<super::hero_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeroSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
