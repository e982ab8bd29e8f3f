use std::sync::Arc;

use chrono::Utc;
use models::booking::{self, BookingStatus};
use models::buybike;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::booking::pricing::Quote;
use crate::booking::repository::BookingRepository;
use crate::errors::ServiceError;

pub struct SeaOrmBookingRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SeaOrmBookingRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait::async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn find_bike(&self, bike_id: i32) -> Result<Option<buybike::Model>, ServiceError> {
        Ok(buybike::Entity::find_by_id(bike_id).one(self.db.as_ref()).await?)
    }

    async fn insert_booking(&self, bike_id: i32, user_id: Option<i32>, quote: &Quote) -> Result<booking::Model, ServiceError> {
        let now = Utc::now().into();
        let am = booking::ActiveModel {
            buybike_id: Set(bike_id),
            user_id: Set(user_id),
            amount: Set(quote.amount),
            gst_amount: Set(quote.gst_amount),
            test_drive_fee: Set(quote.test_drive_fee),
            total_amount: Set(quote.total_amount),
            status: Set(BookingStatus::Created),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Ok(am.insert(self.db.as_ref()).await?)
    }

    async fn mark_bike_booked(&self, bike_id: i32) -> Result<(), ServiceError> {
        buybike::Entity::update_many()
            .col_expr(buybike::Column::IsBooked, Expr::value(true))
            .filter(buybike::Column::Id.eq(bike_id))
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn find_booking(&self, booking_id: i32) -> Result<Option<booking::Model>, ServiceError> {
        Ok(booking::Entity::find_by_id(booking_id).one(self.db.as_ref()).await?)
    }

    async fn set_status(&self, booking: booking::Model, status: BookingStatus) -> Result<booking::Model, ServiceError> {
        let mut am: booking::ActiveModel = booking.into();
        am.status = Set(status);
        am.updated_at = Set(Utc::now().into());
        Ok(am.update(self.db.as_ref()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::pricing::quote;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn insert_then_flag_update() {
        let q = quote(100_000, Decimal::new(500, 0));
        let now = Utc::now().into();
        let stored = booking::Model {
            id: 1,
            buybike_id: 7,
            user_id: None,
            amount: q.amount,
            gst_amount: q.gst_amount,
            test_drive_fee: q.test_drive_fee,
            total_amount: q.total_amount,
            status: BookingStatus::Created,
            created_at: now,
            updated_at: now,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored]])
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
            .into_connection();
        let repo = SeaOrmBookingRepository::new(db);
        let b = repo.insert_booking(7, None, &q).await.unwrap();
        assert_eq!(b.total_amount, q.total_amount);
        repo.mark_bike_booked(7).await.unwrap();

        let log = Arc::try_unwrap(repo.db).ok().expect("sole owner").into_transaction_log();
        assert_eq!(log.len(), 2);
        let first = format!("{:?}", log[0]);
        let second = format!("{:?}", log[1]);
        assert!(first.contains("INSERT INTO") && first.contains("booking"), "{first}");
        assert!(second.contains("UPDATE") && second.contains("is_booked"), "{second}");
    }
}
