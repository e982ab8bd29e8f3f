//! Booking price computation. Pure; no persistence.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// 18%, scale 2.
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Money amounts frozen onto a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub amount: Decimal,
    pub gst_amount: Decimal,
    pub test_drive_fee: Decimal,
    pub total_amount: Decimal,
}

fn money(value: Decimal) -> Decimal {
    let mut v = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    v.rescale(2);
    v
}

/// `gst = round(price * 0.18, 2)` with banker's rounding,
/// `total = price + gst + fee`, everything at two decimal places.
///
/// ```
/// use rust_decimal::Decimal;
/// use service::booking::pricing::quote;
///
/// let q = quote(100_000, Decimal::new(500, 0));
/// assert_eq!(q.gst_amount.to_string(), "18000.00");
/// assert_eq!(q.total_amount.to_string(), "118500.00");
/// ```
pub fn quote(price: i32, test_drive_fee: Decimal) -> Quote {
    let amount = money(Decimal::from(price));
    let gst_amount = money(amount * GST_RATE);
    let test_drive_fee = money(test_drive_fee);
    let total_amount = money(amount + gst_amount + test_drive_fee);
    Quote { amount, gst_amount, test_drive_fee, total_amount }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn reference_scenario() {
        let q = quote(100_000, d("500"));
        assert_eq!(q.amount.to_string(), "100000.00");
        assert_eq!(q.gst_amount.to_string(), "18000.00");
        assert_eq!(q.test_drive_fee.to_string(), "500.00");
        assert_eq!(q.total_amount.to_string(), "118500.00");
    }

    #[test]
    fn zero_fee() {
        let q = quote(0, Decimal::ZERO);
        assert_eq!(q.total_amount.to_string(), "0.00");
    }

    #[test]
    fn gst_keeps_cents() {
        // 1234 * 0.18 = 222.12
        assert_eq!(quote(1234, Decimal::ZERO).gst_amount.to_string(), "222.12");
        // 1 * 0.18 = 0.18
        assert_eq!(quote(1, d("0.5")).total_amount.to_string(), "1.68");
    }

    #[test]
    fn half_even_rounding() {
        assert_eq!(money(d("0.125")).to_string(), "0.12");
        assert_eq!(money(d("0.135")).to_string(), "0.14");
    }

    #[test]
    fn total_is_sum_of_parts() {
        for price in [1, 99, 4_999, 73_250, 1_000_000] {
            for fee in ["0", "250", "999.99"] {
                let q = quote(price, d(fee));
                assert_eq!(q.total_amount, q.amount + q.gst_amount + q.test_drive_fee);
                assert_eq!(q.gst_amount, money(Decimal::from(price) * GST_RATE));
            }
        }
    }
}
