use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{content::contact_config, errors::ModelError, user::validate_email};

/// Immutable once stored, apart from `sent_email`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "config")]
    pub config_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub found_us: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub sent_email: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Config,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Config => Entity::belongs_to(contact_config::Entity)
                .from(Column::ConfigId)
                .to(contact_config::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
        }
    }
}

impl Related<contact_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Config.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Collects every field problem instead of stopping at the first one.
pub fn validate(name: &str, email: &str) -> Vec<ModelError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(ModelError::field("name", "This field may not be blank."));
    } else if name.chars().count() > 255 {
        errors.push(ModelError::field("name", "Ensure this field has no more than 255 characters."));
    }
    if email.trim().is_empty() {
        errors.push(ModelError::field("email", "This field may not be blank."));
    } else if let Err(e) = validate_email(email) {
        errors.push(e);
    }
    errors
}
