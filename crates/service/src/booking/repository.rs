use async_trait::async_trait;
use models::booking::{self, BookingStatus};
use models::buybike;

use super::pricing::Quote;
use crate::errors::ServiceError;

/// Persistence used by the booking workflow.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_bike(&self, bike_id: i32) -> Result<Option<buybike::Model>, ServiceError>;
    async fn insert_booking(&self, bike_id: i32, user_id: Option<i32>, quote: &Quote) -> Result<booking::Model, ServiceError>;
    /// Sets `is_booked` only; other bike columns are left alone.
    async fn mark_bike_booked(&self, bike_id: i32) -> Result<(), ServiceError>;

    async fn find_booking(&self, booking_id: i32) -> Result<Option<booking::Model>, ServiceError>;
    async fn set_status(&self, booking: booking::Model, status: BookingStatus) -> Result<booking::Model, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBookingRepository {
        bikes: Mutex<HashMap<i32, buybike::Model>>,
        bookings: Mutex<HashMap<i32, booking::Model>>,
    }

    impl MockBookingRepository {
        pub fn with_bikes(bikes: impl IntoIterator<Item = buybike::Model>) -> Self {
            let repo = Self::default();
            repo.bikes.lock().unwrap().extend(bikes.into_iter().map(|b| (b.id, b)));
            repo
        }

        pub fn bike(&self, id: i32) -> Option<buybike::Model> {
            self.bikes.lock().unwrap().get(&id).cloned()
        }

        pub fn set_bike_price(&self, id: i32, price: i32) {
            if let Some(b) = self.bikes.lock().unwrap().get_mut(&id) {
                b.price = price;
            }
        }
    }

    #[async_trait]
    impl BookingRepository for MockBookingRepository {
        async fn find_bike(&self, bike_id: i32) -> Result<Option<buybike::Model>, ServiceError> {
            Ok(self.bike(bike_id))
        }

        async fn insert_booking(&self, bike_id: i32, user_id: Option<i32>, quote: &Quote) -> Result<booking::Model, ServiceError> {
            let mut bookings = self.bookings.lock().unwrap();
            let now = Utc::now().into();
            let b = booking::Model {
                id: bookings.len() as i32 + 1,
                buybike_id: bike_id,
                user_id,
                amount: quote.amount,
                gst_amount: quote.gst_amount,
                test_drive_fee: quote.test_drive_fee,
                total_amount: quote.total_amount,
                status: BookingStatus::Created,
                created_at: now,
                updated_at: now,
            };
            bookings.insert(b.id, b.clone());
            Ok(b)
        }

        async fn mark_bike_booked(&self, bike_id: i32) -> Result<(), ServiceError> {
            if let Some(b) = self.bikes.lock().unwrap().get_mut(&bike_id) {
                b.is_booked = true;
            }
            Ok(())
        }

        async fn find_booking(&self, booking_id: i32) -> Result<Option<booking::Model>, ServiceError> {
            Ok(self.bookings.lock().unwrap().get(&booking_id).cloned())
        }

        async fn set_status(&self, booking: booking::Model, status: BookingStatus) -> Result<booking::Model, ServiceError> {
            let mut bookings = self.bookings.lock().unwrap();
            let stored = bookings.get_mut(&booking.id).ok_or_else(ServiceError::not_found)?;
            stored.status = status;
            stored.updated_at = Utc::now().into();
            Ok(stored.clone())
        }
    }
}
