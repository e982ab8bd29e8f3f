//! Catalog item. Table name is `buybike`.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, location};

pub const OWNERS_CHOICES: [&str; 4] = ["1st Owner", "2nd Owner", "3rd Owner", "4th+ Owner"];
pub const TRANSMISSION_CHOICES: [&str; 3] = ["manual", "auto", "semi-auto"];
pub const ODOMETER_CHOICES: [&str; 3] = ["analogue", "digital", "both"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "buybike")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: i32,
    #[serde(rename = "location")]
    pub location_id: Option<i32>,

    pub brand: String,
    pub bike_model: String,
    pub bike_variant: String,
    pub year: Option<i16>,
    pub registration_year: Option<i16>,
    pub kilometers: Option<i32>,
    pub engine_cc: Option<i16>,
    pub fuel_type: String,
    pub color: String,
    pub category: String,

    pub owner: String,
    pub owners: Option<String>,
    pub transmission: Option<String>,
    pub rto_state: String,
    pub rto_city: String,

    pub refurbished: bool,
    pub registration_certificate: bool,
    pub finance: bool,
    pub insurance: bool,
    pub warranty: bool,
    pub is_booked: bool,

    pub featured_image: Option<String>,
    pub card_bg_image: Option<String>,
    pub variant_image1: Option<String>,
    pub variant_image2: Option<String>,
    pub variant_image3: Option<String>,
    pub variant_image4: Option<String>,
    pub variant_image5: Option<String>,

    pub ignition_type: String,
    pub front_brake_type: String,
    pub rear_brake_type: String,
    pub abs: bool,
    pub odometer: Option<String>,
    pub wheel_type: String,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Location,
    Booking,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Location => Entity::belongs_to(location::Entity)
                .from(Column::LocationId)
                .to(location::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
            Relation::Booking => Entity::has_many(crate::booking::Entity).into(),
        }
    }
}

impl Related<location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<crate::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn validate_choice(field: &'static str, value: Option<&str>, choices: &[&str]) -> Result<(), ModelError> {
    match value {
        None => Ok(()),
        Some(v) if choices.contains(&v) => Ok(()),
        Some(v) => Err(ModelError::field(field, format!("\"{v}\" is not a valid choice."))),
    }
}

impl Model {
    /// Checks the enumerated text columns against their allowed values.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.price < 0 {
            return Err(ModelError::field("price", "Ensure this value is greater than or equal to 0."));
        }
        validate_choice("owners", self.owners.as_deref(), &OWNERS_CHOICES)?;
        validate_choice("transmission", self.transmission.as_deref(), &TRANSMISSION_CHOICES)?;
        validate_choice("odometer", self.odometer.as_deref(), &ODOMETER_CHOICES)?;
        Ok(())
    }
}

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures {
    use super::Model;
    use chrono::{FixedOffset, TimeZone};

    pub fn bike(id: i32, price: i32) -> Model {
        let ts = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        Model {
            id,
            title: format!("Bike {id}"),
            description: String::new(),
            price,
            location_id: None,
            brand: "Royal Enfield".into(),
            bike_model: "Classic 350".into(),
            bike_variant: String::new(),
            year: Some(2021),
            registration_year: Some(2021),
            kilometers: Some(12000),
            engine_cc: Some(349),
            fuel_type: "Petrol".into(),
            color: "Black".into(),
            category: "Cruiser".into(),
            owner: String::new(),
            owners: Some("1st Owner".into()),
            transmission: Some("manual".into()),
            rto_state: String::new(),
            rto_city: String::new(),
            refurbished: false,
            registration_certificate: true,
            finance: false,
            insurance: true,
            warranty: false,
            is_booked: false,
            featured_image: None,
            card_bg_image: None,
            variant_image1: None,
            variant_image2: None,
            variant_image3: None,
            variant_image4: None,
            variant_image5: None,
            ignition_type: String::new(),
            front_brake_type: String::new(),
            rear_brake_type: String::new(),
            abs: false,
            odometer: None,
            wheel_type: String::new(),
            created_at: ts,
            updated_at: ts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::bike;

    #[test]
    fn accepts_known_choices() {
        let mut b = bike(1, 50_000);
        b.odometer = Some("digital".into());
        assert!(b.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_transmission() {
        let mut b = bike(1, 50_000);
        b.transmission = Some("cvt".into());
        let err = b.validate().unwrap_err();
        assert!(err.to_string().starts_with("transmission:"));
    }

    #[test]
    fn rejects_negative_price() {
        assert!(bike(1, -1).validate().is_err());
    }
}
