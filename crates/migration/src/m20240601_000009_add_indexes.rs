use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Catalog: default listing order and the common range filters
        manager
            .create_index(
                Index::create()
                    .name("idx_buybike_created_at")
                    .table(BuyBike::Table)
                    .col(BuyBike::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_buybike_price")
                    .table(BuyBike::Table)
                    .col(BuyBike::Price)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_buybike_location")
                    .table(BuyBike::Table)
                    .col(BuyBike::LocationId)
                    .to_owned(),
            )
            .await?;

        // Booking: lookups by bike
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_buybike")
                    .table(Booking::Table)
                    .col(Booking::BuybikeId)
                    .to_owned(),
            )
            .await?;

        // Child rows read together with their parent
        manager
            .create_index(
                Index::create()
                    .name("idx_stat_item_banner")
                    .table(StatItem::Table)
                    .col(StatItem::BannerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_hero_bike_image_section")
                    .table(HeroBikeImage::Table)
                    .col(HeroBikeImage::HeroSectionId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_last_section_image_section")
                    .table(LastSectionImage::Table)
                    .col(LastSectionImage::SectionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_buybike_created_at").table(BuyBike::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_buybike_price").table(BuyBike::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_buybike_location").table(BuyBike::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_booking_buybike").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_stat_item_banner").table(StatItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_hero_bike_image_section").table(HeroBikeImage::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_last_section_image_section").table(LastSectionImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BuyBike {
    #[sea_orm(iden = "buybike")]
    Table,
    CreatedAt,
    Price,
    LocationId,
}

#[derive(DeriveIden)]
enum Booking { Table, BuybikeId }

#[derive(DeriveIden)]
enum StatItem { Table, BannerId }

#[derive(DeriveIden)]
enum HeroBikeImage { Table, HeroSectionId }

#[derive(DeriveIden)]
enum LastSectionImage { Table, SectionId }
