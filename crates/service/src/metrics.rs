use once_cell::sync::Lazy;
use prometheus::{register_int_counter, IntCounter};

// Prometheus metrics (default registry)
pub static BOOKINGS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "bike_market_bookings_created_total",
        "Total bookings created"
    )
    .expect("register bookings_created_total")
});

pub static PAYMENTS_CONFIRMED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "bike_market_payments_confirmed_total",
        "Total bookings marked as paid"
    )
    .expect("register payments_confirmed_total")
});

pub static NOTIFICATIONS_FAILED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "bike_market_notifications_failed_total",
        "Total notification emails that could not be delivered"
    )
    .expect("register notifications_failed_total")
});

/// Touch every counter so they appear in scrapes before the first event.
pub fn register_all() {
    Lazy::force(&BOOKINGS_CREATED_TOTAL);
    Lazy::force(&PAYMENTS_CONFIRMED_TOTAL);
    Lazy::force(&NOTIFICATIONS_FAILED_TOTAL);
}
