//! Create `location` and `buybike` tables.
//!
//! `buybike.location_id` is nullable and set to NULL when the location goes away.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(string_len(Location::Name, 150).unique_key().not_null())
                    .col(string_len_null(Location::Image, 255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BuyBike::Table)
                    .if_not_exists()
                    .col(pk_auto(BuyBike::Id))
                    .col(string_len(BuyBike::Title, 255).not_null())
                    .col(text(BuyBike::Description).not_null().default(""))
                    .col(integer(BuyBike::Price).not_null().check(Expr::col(BuyBike::Price).gte(0)))
                    .col(integer_null(BuyBike::LocationId))
                    .col(string_len(BuyBike::Brand, 100).not_null().default(""))
                    .col(string_len(BuyBike::BikeModel, 150).not_null().default(""))
                    .col(string_len(BuyBike::BikeVariant, 120).not_null().default(""))
                    .col(small_integer_null(BuyBike::Year))
                    .col(small_integer_null(BuyBike::RegistrationYear))
                    .col(integer_null(BuyBike::Kilometers))
                    .col(small_integer_null(BuyBike::EngineCc))
                    .col(string_len(BuyBike::FuelType, 50).not_null().default(""))
                    .col(string_len(BuyBike::Color, 50).not_null().default(""))
                    .col(string_len(BuyBike::Category, 100).not_null().default(""))
                    .col(string_len(BuyBike::Owner, 150).not_null().default(""))
                    .col(string_len_null(BuyBike::Owners, 20))
                    .col(string_len_null(BuyBike::Transmission, 12))
                    .col(string_len(BuyBike::RtoState, 120).not_null().default(""))
                    .col(string_len(BuyBike::RtoCity, 120).not_null().default(""))
                    .col(boolean(BuyBike::Refurbished).not_null().default(false))
                    .col(boolean(BuyBike::RegistrationCertificate).not_null().default(false))
                    .col(boolean(BuyBike::Finance).not_null().default(false))
                    .col(boolean(BuyBike::Insurance).not_null().default(false))
                    .col(boolean(BuyBike::Warranty).not_null().default(false))
                    .col(boolean(BuyBike::IsBooked).not_null().default(false))
                    .col(string_len_null(BuyBike::FeaturedImage, 255))
                    .col(string_len_null(BuyBike::CardBgImage, 255))
                    .col(string_len_null(BuyBike::VariantImage1, 255))
                    .col(string_len_null(BuyBike::VariantImage2, 255))
                    .col(string_len_null(BuyBike::VariantImage3, 255))
                    .col(string_len_null(BuyBike::VariantImage4, 255))
                    .col(string_len_null(BuyBike::VariantImage5, 255))
                    .col(string_len(BuyBike::IgnitionType, 120).not_null().default(""))
                    .col(string_len(BuyBike::FrontBrakeType, 120).not_null().default(""))
                    .col(string_len(BuyBike::RearBrakeType, 120).not_null().default(""))
                    .col(boolean(BuyBike::Abs).not_null().default(false))
                    .col(string_len_null(BuyBike::Odometer, 20))
                    .col(string_len(BuyBike::WheelType, 120).not_null().default(""))
                    .col(timestamp_with_time_zone(BuyBike::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BuyBike::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_buybike_location")
                            .from(BuyBike::Table, BuyBike::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BuyBike::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Location::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Location { Table, Id, Name, Image }

#[derive(DeriveIden)]
enum BuyBike {
    #[sea_orm(iden = "buybike")]
    Table,
    Id,
    Title,
    Description,
    Price,
    LocationId,
    Brand,
    BikeModel,
    BikeVariant,
    Year,
    RegistrationYear,
    Kilometers,
    EngineCc,
    FuelType,
    Color,
    Category,
    Owner,
    Owners,
    Transmission,
    RtoState,
    RtoCity,
    Refurbished,
    RegistrationCertificate,
    Finance,
    Insurance,
    Warranty,
    IsBooked,
    FeaturedImage,
    CardBgImage,
    VariantImage1,
    VariantImage2,
    VariantImage3,
    VariantImage4,
    VariantImage5,
    IgnitionType,
    FrontBrakeType,
    RearBrakeType,
    Abs,
    Odometer,
    WheelType,
    CreatedAt,
    UpdatedAt,
}
