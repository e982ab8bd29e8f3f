//! Create the sell-bike page tables and the closing "last section" strip.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SellBikePage::Table)
                    .if_not_exists()
                    .col(pk_auto(SellBikePage::Id))
                    .col(string_len(SellBikePage::TopBannerImage, 255).not_null())
                    .col(text(SellBikePage::TopBannerText).not_null())
                    .col(string_len(SellBikePage::SecondBannerImage, 255).not_null())
                    .col(text_null(SellBikePage::SecondBannerTopText))
                    .col(string_len_null(SellBikePage::SecondBannerBottomText, 200))
                    .col(text_null(SellBikePage::BrandOptions))
                    .col(text_null(SellBikePage::ModelOptions))
                    .col(text_null(SellBikePage::VariantOptions))
                    .col(text_null(SellBikePage::YearOptions))
                    .col(text_null(SellBikePage::KmsOptions))
                    .col(text_null(SellBikePage::OwnerOptions))
                    .col(string_len_null(SellBikePage::ThirdTitle, 200))
                    .col(timestamp_with_time_zone(SellBikePage::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HowItWorks::Table)
                    .if_not_exists()
                    .col(pk_auto(HowItWorks::Id))
                    .col(integer(HowItWorks::PageId).not_null())
                    .col(string_len(HowItWorks::Title, 100).not_null())
                    .col(string_len(HowItWorks::Image, 255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_how_it_works_page")
                            .from(HowItWorks::Table, HowItWorks::PageId)
                            .to(SellBikePage::Table, SellBikePage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LastSection::Table)
                    .if_not_exists()
                    .col(pk_auto(LastSection::Id))
                    .col(string_len_null(LastSection::Heading, 255))
                    .col(text_null(LastSection::Subtitle))
                    .col(timestamp_with_time_zone(LastSection::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(LastSection::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LastSectionImage::Table)
                    .if_not_exists()
                    .col(pk_auto(LastSectionImage::Id))
                    .col(integer(LastSectionImage::SectionId).not_null())
                    .col(string_len(LastSectionImage::Image, 255).not_null())
                    .col(string_len_null(LastSectionImage::Title, 255))
                    .col(integer(LastSectionImage::OrderNo).not_null().default(0))
                    .col(string_len_null(LastSectionImage::AltText, 255))
                    .col(timestamp_with_time_zone(LastSectionImage::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_last_section_image_section")
                            .from(LastSectionImage::Table, LastSectionImage::SectionId)
                            .to(LastSection::Table, LastSection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LastSectionImage::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(LastSection::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HowItWorks::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(SellBikePage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SellBikePage {
    Table,
    Id,
    TopBannerImage,
    TopBannerText,
    SecondBannerImage,
    SecondBannerTopText,
    SecondBannerBottomText,
    BrandOptions,
    ModelOptions,
    VariantOptions,
    YearOptions,
    KmsOptions,
    OwnerOptions,
    ThirdTitle,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HowItWorks { Table, Id, PageId, Title, Image }

#[derive(DeriveIden)]
enum LastSection { Table, Id, Heading, Subtitle, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum LastSectionImage { Table, Id, SectionId, Image, Title, OrderNo, AltText, CreatedAt }
