use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::publish::Publishable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub heading: String,
    pub subheading: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub map_embed_url: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    /// JSON array of strings offered in the "reason" dropdown.
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub reason_choices: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub found_us_choices: Option<Json>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Submissions,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Submissions => Entity::has_many(crate::contact_submission::Entity).into(),
        }
    }
}

impl Related<crate::contact_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
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
