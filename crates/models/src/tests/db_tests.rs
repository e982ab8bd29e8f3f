use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use super::test_db;
use crate::booking::{self, BookingStatus};
use crate::content::faq;
use crate::{buybike, published, user, user_credentials};

#[tokio::test]
async fn test_latest_active_faq_wins() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };
    let txn = db.begin().await?;
    let now = Utc::now();

    for (question, is_active, order) in [("hidden-a", false, -200), ("shown", true, -150), ("hidden-b", false, -300)] {
        faq::ActiveModel {
            question: Set(question.to_string()),
            answer: Set("-".to_string()),
            order: Set(order),
            is_active: Set(is_active),
            created_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    let first = published::<faq::Entity>().one(&txn).await?.expect("an active faq");
    assert_eq!(first.question, "shown");

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn test_user_with_credentials() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };
    let txn = db.begin().await?;

    let username = format!("rider_{}", Uuid::new_v4().simple());
    let created = user::create(
        &txn,
        user::NewUser { username: &username, email: "rider@example.com", first_name: "Ravi", last_name: "" },
    )
    .await?;
    assert!(created.is_active);

    user_credentials::upsert_password(&txn, created.id, "$argon2id$v=19$stub".into(), "argon2id").await?;
    let creds = user_credentials::find_by_user(&txn, created.id).await?.expect("credentials");
    assert_eq!(creds.password_algorithm, "argon2id");

    let found = user::find_by_username(&txn, &username).await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn test_booking_references_bike() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };
    let txn = db.begin().await?;
    let now = Utc::now();

    let mut bike: buybike::ActiveModel = buybike::fixtures::bike(0, 100_000).into();
    bike.id = sea_orm::ActiveValue::NotSet;
    bike.created_at = Set(now.into());
    bike.updated_at = Set(now.into());
    let bike = bike.insert(&txn).await?;

    let stored = booking::ActiveModel {
        buybike_id: Set(bike.id),
        user_id: Set(None),
        amount: Set(rust_decimal::Decimal::new(10_000_000, 2)),
        gst_amount: Set(rust_decimal::Decimal::new(1_800_000, 2)),
        test_drive_fee: Set(rust_decimal::Decimal::new(50_000, 2)),
        total_amount: Set(rust_decimal::Decimal::new(11_850_000, 2)),
        status: Set(BookingStatus::Created),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let found = booking::Entity::find_by_id(stored.id).one(&txn).await?.expect("booking");
    assert_eq!(found.total_amount.to_string(), "118500.00");
    assert_eq!(found.status, BookingStatus::Created);

    txn.rollback().await?;
    Ok(())
}
