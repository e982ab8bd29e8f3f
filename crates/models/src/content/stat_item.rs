use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stat_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub banner_id: i32,
    pub icon: Option<String>,
    pub value: String,
    pub caption: String,
    pub order: i32,
    pub is_visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Banner,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Banner => Entity::belongs_to(super::homepage_banner::Entity)
                .from(Column::BannerId)
                .to(super::homepage_banner::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<super::homepage_banner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Banner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
