use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    BuyBike,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::BuyBike => Entity::has_many(crate::buybike::Entity).into(),
        }
    }
}

impl Related<crate::buybike::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuyBike.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
