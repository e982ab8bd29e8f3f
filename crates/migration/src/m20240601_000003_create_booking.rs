//! Create `booking` table.
//!
//! Amounts are frozen at creation: the row keeps the bike price it was
//! quoted with, independent of later catalog edits.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::BuybikeId).not_null())
                    .col(integer_null(Booking::UserId))
                    .col(decimal_len(Booking::Amount, 10, 2).not_null().default(0))
                    .col(decimal_len(Booking::GstAmount, 10, 2).not_null().default(0))
                    .col(decimal_len(Booking::TestDriveFee, 10, 2).not_null().default(0))
                    .col(decimal_len(Booking::TotalAmount, 12, 2).not_null().default(0))
                    .col(string_len(Booking::Status, 20).not_null().default("created"))
                    .col(timestamp_with_time_zone(Booking::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Booking::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_buybike")
                            .from(Booking::Table, Booking::BuybikeId)
                            .to(BuyBike::Table, BuyBike::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, Id, BuybikeId, UserId, Amount, GstAmount, TestDriveFee, TotalAmount, Status, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum BuyBike {
    #[sea_orm(iden = "buybike")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User { Table, Id }
