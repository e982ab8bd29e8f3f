use std::sync::Arc;

use models::booking::BookingStatus;
use models::buybike;
use tracing::{info, instrument, warn};

use super::domain::{BikeSummary, BookingDetail, BookingRequest};
use super::pricing::quote;
use super::repository::BookingRepository;
use crate::errors::{FieldErrors, ServiceError};
use crate::media::MediaUrls;
use crate::metrics::{BOOKINGS_CREATED_TOTAL, PAYMENTS_CONFIRMED_TOTAL};

pub struct BookingService<R: BookingRepository> {
    repo: Arc<R>,
    media: MediaUrls,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(repo: Arc<R>, media: MediaUrls) -> Self {
        Self { repo, media }
    }

    fn summary(&self, bike: &buybike::Model) -> BikeSummary {
        BikeSummary {
            id: bike.id,
            title: bike.title.clone(),
            price: bike.price,
            featured_image_url: self.media.url(bike.featured_image.as_deref()),
        }
    }

    /// Books a bike for the optional session user.
    ///
    /// The bike is flagged as booked after the insert, whether or not it
    /// already was.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use serde_json::json;
    /// use service::booking::{BookingService, domain::BookingRequest, repository::mock::MockBookingRepository};
    /// use service::media::MediaUrls;
    ///
    /// let repo = Arc::new(MockBookingRepository::with_bikes([models::buybike::fixtures::bike(1, 100_000)]));
    /// let svc = BookingService::new(repo.clone(), MediaUrls::default());
    /// let req = BookingRequest { buybike: Some(json!(1)), test_drive_fee: Some(json!(500)) };
    /// let detail = tokio_test::block_on(svc.create(&req, None)).unwrap();
    /// assert_eq!(detail.total_amount.to_string(), "118500.00");
    /// assert!(repo.bike(1).unwrap().is_booked);
    /// ```
    #[instrument(skip(self, req))]
    pub async fn create(&self, req: &BookingRequest, user_id: Option<i32>) -> Result<BookingDetail, ServiceError> {
        let input = req.validate()?;
        let bike = self.repo.find_bike(input.buybike_id).await?.ok_or_else(|| {
            FieldErrors::single("buybike", format!("Invalid pk \"{}\" - object does not exist.", input.buybike_id))
        })?;
        if bike.is_booked {
            warn!(bike_id = bike.id, "bike already booked; booking anyway");
        }

        let q = quote(bike.price, input.test_drive_fee);
        let booking = self.repo.insert_booking(bike.id, user_id, &q).await?;
        self.repo.mark_bike_booked(bike.id).await?;

        BOOKINGS_CREATED_TOTAL.inc();
        info!(booking_id = booking.id, bike_id = bike.id, total = %booking.total_amount, "booking_created");
        Ok(BookingDetail::new(booking, Some(self.summary(&bike))))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, booking_id: i32) -> Result<BookingDetail, ServiceError> {
        let booking = self.repo.find_booking(booking_id).await?.ok_or_else(ServiceError::not_found)?;
        let bike = self.repo.find_bike(booking.buybike_id).await?;
        let summary = bike.as_ref().map(|b| self.summary(b));
        Ok(BookingDetail::new(booking, summary))
    }

    /// Marks a booking paid. No payment data is recorded.
    #[instrument(skip(self))]
    pub async fn confirm_payment(&self, booking_id: i32) -> Result<(), ServiceError> {
        let booking = self.repo.find_booking(booking_id).await?.ok_or_else(ServiceError::not_found)?;
        if booking.status == BookingStatus::Paid {
            return Err(ServiceError::Validation("Already paid".into()));
        }
        if !booking.status.can_transition_to(BookingStatus::Paid) {
            return Err(ServiceError::Validation(format!("Cannot mark a {} booking as paid", booking.status.as_str())));
        }
        self.repo.set_status(booking, BookingStatus::Paid).await?;
        PAYMENTS_CONFIRMED_TOTAL.inc();
        info!(booking_id, "payment_confirmed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::repository::mock::MockBookingRepository;
    use models::buybike::fixtures::bike;
    use serde_json::json;

    fn setup(bikes: Vec<buybike::Model>) -> (Arc<MockBookingRepository>, BookingService<MockBookingRepository>) {
        let repo = Arc::new(MockBookingRepository::with_bikes(bikes));
        let svc = BookingService::new(repo.clone(), MediaUrls::new("http://localhost:8080/media/"));
        (repo, svc)
    }

    fn req(bike: i32, fee: serde_json::Value) -> BookingRequest {
        BookingRequest { buybike: Some(json!(bike)), test_drive_fee: Some(fee) }
    }

    #[tokio::test]
    async fn create_prices_and_flags_bike() {
        let (repo, svc) = setup(vec![bike(1, 100_000)]);
        let detail = svc.create(&req(1, json!(500)), Some(42)).await.unwrap();
        assert_eq!(detail.amount.to_string(), "100000.00");
        assert_eq!(detail.gst_amount.to_string(), "18000.00");
        assert_eq!(detail.total_amount.to_string(), "118500.00");
        assert_eq!(detail.status, BookingStatus::Created);
        assert_eq!(detail.buybike_obj.as_ref().map(|b| b.price), Some(100_000));
        assert!(repo.bike(1).unwrap().is_booked);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["gst_amount"], "18000.00");
        assert_eq!(json["status"], "created");
        assert_eq!(json["buybike"], 1);
    }

    #[tokio::test]
    async fn already_booked_bike_can_be_booked_again() {
        let mut b = bike(2, 50_000);
        b.is_booked = true;
        let (repo, svc) = setup(vec![b]);
        let first = svc.create(&req(2, json!(0)), None).await.unwrap();
        let second = svc.create(&req(2, json!(0)), None).await.unwrap();
        assert_ne!(first.id, second.id);
        assert!(repo.bike(2).unwrap().is_booked);
    }

    #[tokio::test]
    async fn unknown_bike_is_field_error() {
        let (_repo, svc) = setup(vec![]);
        match svc.create(&req(9, json!(0)), None).await {
            Err(ServiceError::Fields(f)) => {
                assert_eq!(f.get("buybike"), Some(&["Invalid pk \"9\" - object does not exist.".to_string()][..]))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn amounts_frozen_after_price_change() {
        let (repo, svc) = setup(vec![bike(3, 10_000)]);
        let created = svc.create(&req(3, json!("100")), None).await.unwrap();
        repo.set_bike_price(3, 99_999);
        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched.amount.to_string(), "10000.00");
        assert_eq!(fetched.total_amount.to_string(), "11900.00");
    }

    #[tokio::test]
    async fn confirm_twice_fails_second_time() {
        let (_repo, svc) = setup(vec![bike(1, 1_000)]);
        let b = svc.create(&req(1, json!(0)), None).await.unwrap();
        svc.confirm_payment(b.id).await.unwrap();
        match svc.confirm_payment(b.id).await {
            Err(ServiceError::Validation(msg)) => assert_eq!(msg, "Already paid"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(svc.get(b.id).await.unwrap().status, BookingStatus::Paid);
    }

    #[tokio::test]
    async fn cancelled_booking_cannot_be_paid() {
        let (repo, svc) = setup(vec![bike(1, 1_000)]);
        let b = svc.create(&req(1, json!(0)), None).await.unwrap();
        let stored = repo.find_booking(b.id).await.unwrap().unwrap();
        repo.set_status(stored, BookingStatus::Cancelled).await.unwrap();
        assert!(matches!(svc.confirm_payment(b.id).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn confirm_missing_booking() {
        let (_repo, svc) = setup(vec![]);
        match svc.confirm_payment(404).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "Not found."),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(svc.get(404).await, Err(ServiceError::NotFound(_))));
    }
}
