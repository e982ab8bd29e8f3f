use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use models::booking::{self, BookingStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{FieldErrors, REQUIRED};

const FEE_MAX_DIGITS: u32 = 10;
const FEE_DECIMAL_PLACES: u32 = 2;

/// Body of `POST /bookings/`. Fields stay loosely typed so that wrong types
/// surface as field errors rather than a rejected body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub buybike: Option<Value>,
    pub test_drive_fee: Option<Value>,
}

/// Validated booking input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBooking {
    pub buybike_id: i32,
    pub test_drive_fee: Decimal,
}

fn parse_bike_id(value: &Value) -> Result<i32, String> {
    let incorrect = |v: &Value| format!("Incorrect type. Expected pk value, received {}.", json_type(v));
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()).ok_or_else(|| incorrect(value)),
        Value::String(s) => s.trim().parse::<i32>().map_err(|_| incorrect(value)),
        other => Err(incorrect(other)),
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn parse_fee(value: &Value) -> Result<Decimal, String> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Err("A valid number is required.".into()),
    };
    let fee = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| "A valid number is required.".to_string())?;
    let fee = fee.normalize();
    if fee.scale() > FEE_DECIMAL_PLACES {
        return Err(format!("Ensure that there are no more than {FEE_DECIMAL_PLACES} decimal places."));
    }
    let integer_digits = fee.trunc().abs().to_string().trim_start_matches('0').len() as u32;
    if integer_digits + FEE_DECIMAL_PLACES > FEE_MAX_DIGITS {
        return Err(format!("Ensure that there are no more than {FEE_MAX_DIGITS} digits in total."));
    }
    if fee.is_sign_negative() && !fee.is_zero() {
        return Err("Ensure this value is greater than or equal to 0.".into());
    }
    Ok(fee)
}

impl BookingRequest {
    /// Shape checks only; whether the bike exists is decided by the service.
    pub fn validate(&self) -> Result<NewBooking, FieldErrors> {
        let mut errors = FieldErrors::new();
        let buybike_id = match &self.buybike {
            None | Some(Value::Null) => {
                errors.add("buybike", REQUIRED);
                None
            }
            Some(v) => parse_bike_id(v).map_err(|m| errors.add("buybike", m)).ok(),
        };
        let test_drive_fee = match &self.test_drive_fee {
            None => Some(Decimal::ZERO),
            Some(Value::Null) => {
                errors.add("test_drive_fee", "This field may not be null.");
                None
            }
            Some(v) => parse_fee(v).map_err(|m| errors.add("test_drive_fee", m)).ok(),
        };
        match (buybike_id, test_drive_fee) {
            (Some(buybike_id), Some(test_drive_fee)) if errors.is_empty() => Ok(NewBooking { buybike_id, test_drive_fee }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BikeSummary {
    pub id: i32,
    pub title: String,
    pub price: i32,
    pub featured_image_url: Option<String>,
}

/// Booking as returned by the API. Money renders as a two-decimal string.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetail {
    pub id: i32,
    pub buybike: i32,
    pub buybike_obj: Option<BikeSummary>,
    pub amount: Decimal,
    pub gst_amount: Decimal,
    pub test_drive_fee: Decimal,
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

fn two_places(mut v: Decimal) -> Decimal {
    v.rescale(2);
    v
}

impl BookingDetail {
    pub fn new(b: booking::Model, bike: Option<BikeSummary>) -> Self {
        Self {
            id: b.id,
            buybike: b.buybike_id,
            buybike_obj: bike,
            amount: two_places(b.amount),
            gst_amount: two_places(b.gst_amount),
            test_drive_fee: two_places(b.test_drive_fee),
            total_amount: two_places(b.total_amount),
            status: b.status,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn req(buybike: Value, fee: Option<Value>) -> BookingRequest {
        BookingRequest { buybike: Some(buybike), test_drive_fee: fee }
    }

    #[test]
    fn fee_defaults_to_zero() {
        let ok = req(json!(3), None).validate().unwrap();
        assert_eq!(ok, NewBooking { buybike_id: 3, test_drive_fee: Decimal::ZERO });
    }

    #[test]
    fn accepts_string_inputs() {
        let ok = req(json!("3"), Some(json!("250.50"))).validate().unwrap();
        assert_eq!(ok.test_drive_fee, Decimal::new(25050, 2));
    }

    #[test]
    fn negative_fee_rejected() {
        let errs = req(json!(1), Some(json!(-1))).validate().unwrap_err();
        assert_eq!(errs.get("test_drive_fee"), Some(&["Ensure this value is greater than or equal to 0.".to_string()][..]));
    }

    #[test]
    fn fee_precision_limits() {
        assert!(req(json!(1), Some(json!("1.005"))).validate().is_err());
        assert!(req(json!(1), Some(json!("123456789"))).validate().is_err());
        assert!(req(json!(1), Some(json!("12345678.99"))).validate().is_ok());
    }

    #[test]
    fn missing_bike_is_required() {
        let errs = BookingRequest::default().validate().unwrap_err();
        assert_eq!(errs.get("buybike"), Some(&[REQUIRED.to_string()][..]));
    }

    #[test]
    fn wrong_bike_type() {
        let errs = req(json!([1]), None).validate().unwrap_err();
        assert_eq!(errs.get("buybike"), Some(&["Incorrect type. Expected pk value, received list.".to_string()][..]));
    }
}
