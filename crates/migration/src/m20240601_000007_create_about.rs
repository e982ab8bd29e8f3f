//! Create the about page tables.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AboutSectionOne::Table)
                    .if_not_exists()
                    .col(pk_auto(AboutSectionOne::Id))
                    .col(string_len_null(AboutSectionOne::Heading, 255))
                    .col(text_null(AboutSectionOne::Content))
                    .col(string_len_null(AboutSectionOne::Image, 255))
                    .col(string_len_null(AboutSectionOne::AltText, 255))
                    .col(boolean(AboutSectionOne::IsActive).not_null().default(true))
                    .col(integer(AboutSectionOne::Order).not_null().default(0))
                    .col(timestamp_with_time_zone(AboutSectionOne::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AboutSectionOne::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AboutSection1::Table)
                    .if_not_exists()
                    .col(pk_auto(AboutSection1::Id))
                    .col(string_len(AboutSection1::Title, 255).not_null().default("About Us"))
                    .col(text(AboutSection1::Content).not_null().default(""))
                    .col(string_len(AboutSection1::Image, 255).not_null())
                    .col(timestamp_with_time_zone(AboutSection1::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AboutSection2::Table)
                    .if_not_exists()
                    .col(pk_auto(AboutSection2::Id))
                    .col(string_len(AboutSection2::BackgroundImage, 255).not_null())
                    .col(string_len(AboutSection2::OverlayTitle, 255).not_null().default(""))
                    .col(text(AboutSection2::OverlayText).not_null().default(""))
                    .col(timestamp_with_time_zone(AboutSection2::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AboutSection3::Table)
                    .if_not_exists()
                    .col(pk_auto(AboutSection3::Id))
                    .col(string_len(AboutSection3::Title, 255).not_null().default("Our Approach"))
                    .col(text(AboutSection3::Content).not_null().default(""))
                    .col(timestamp_with_time_zone(AboutSection3::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AboutSection3Image::Table)
                    .if_not_exists()
                    .col(pk_auto(AboutSection3Image::Id))
                    .col(integer(AboutSection3Image::SectionId).not_null())
                    .col(string_len(AboutSection3Image::Image, 255).not_null())
                    .col(integer(AboutSection3Image::Order).not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_about_section3_image_section")
                            .from(AboutSection3Image::Table, AboutSection3Image::SectionId)
                            .to(AboutSection3::Table, AboutSection3::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AboutSection3Image::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AboutSection3::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AboutSection2::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AboutSection1::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AboutSectionOne::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AboutSectionOne { Table, Id, Heading, Content, Image, AltText, IsActive, Order, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum AboutSection1 { Table, Id, Title, Content, Image, CreatedAt }

#[derive(DeriveIden)]
enum AboutSection2 { Table, Id, BackgroundImage, OverlayTitle, OverlayText, CreatedAt }

#[derive(DeriveIden)]
enum AboutSection3 { Table, Id, Title, Content, CreatedAt }

#[derive(DeriveIden)]
enum AboutSection3Image { Table, Id, SectionId, Image, Order }
