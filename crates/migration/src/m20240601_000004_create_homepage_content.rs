//! Create the homepage content tables: hero, info, support features, banner
//! with stats, testimonials, trusted section and FAQs.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroSection::Table)
                    .if_not_exists()
                    .col(pk_auto(HeroSection::Id))
                    .col(string_len(HeroSection::Title, 255).not_null())
                    .col(text(HeroSection::Description).not_null().default(""))
                    .col(string_len(HeroSection::ButtonText, 50).not_null().default("Buy Now"))
                    .col(string_len(HeroSection::TrapezoidImage, 255).not_null())
                    .col(boolean(HeroSection::IsActive).not_null().default(true))
                    .col(integer(HeroSection::Order).not_null().default(0))
                    .col(timestamp_with_time_zone(HeroSection::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HeroBikeImage::Table)
                    .if_not_exists()
                    .col(pk_auto(HeroBikeImage::Id))
                    .col(integer(HeroBikeImage::HeroSectionId).not_null())
                    .col(string_len(HeroBikeImage::Image, 255).not_null())
                    .col(integer(HeroBikeImage::Order).not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_bike_image_section")
                            .from(HeroBikeImage::Table, HeroBikeImage::HeroSectionId)
                            .to(HeroSection::Table, HeroSection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InfoSection::Table)
                    .if_not_exists()
                    .col(pk_auto(InfoSection::Id))
                    .col(text(InfoSection::Description).not_null().default(""))
                    .col(string_len(InfoSection::ButtonText, 50).not_null().default("Read More"))
                    .col(string_len(InfoSection::BikeImage, 255).not_null())
                    .col(boolean(InfoSection::IsActive).not_null().default(true))
                    .col(integer(InfoSection::Order).not_null().default(0))
                    .col(timestamp_with_time_zone(InfoSection::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportFeature::Id))
                    .col(string_len(SupportFeature::Title, 120).not_null())
                    .col(string_len(SupportFeature::Subtitle, 140).not_null().default(""))
                    .col(text(SupportFeature::Description).not_null().default(""))
                    .col(string_len(SupportFeature::Image, 255).not_null())
                    .col(string_len_null(SupportFeature::ArrowImage, 255))
                    .col(string_len(SupportFeature::Arrow, 4).not_null().default("up"))
                    .col(boolean(SupportFeature::IsActive).not_null().default(true))
                    .col(integer(SupportFeature::Order).not_null().default(0))
                    .col(timestamp_with_time_zone(SupportFeature::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HomepageBanner::Table)
                    .if_not_exists()
                    .col(pk_auto(HomepageBanner::Id))
                    .col(string_len(HomepageBanner::Title, 255).not_null())
                    .col(string_len_null(HomepageBanner::Logo, 255))
                    .col(boolean(HomepageBanner::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(HomepageBanner::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StatItem::Table)
                    .if_not_exists()
                    .col(pk_auto(StatItem::Id))
                    .col(integer(StatItem::BannerId).not_null())
                    .col(string_len_null(StatItem::Icon, 255))
                    .col(string_len(StatItem::Value, 64).not_null())
                    .col(string_len(StatItem::Caption, 128).not_null())
                    .col(integer(StatItem::Order).not_null().default(0))
                    .col(boolean(StatItem::IsVisible).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stat_item_banner")
                            .from(StatItem::Table, StatItem::BannerId)
                            .to(HomepageBanner::Table, HomepageBanner::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TestimonialsSection::Table)
                    .if_not_exists()
                    .col(pk_auto(TestimonialsSection::Id))
                    .col(string_len(TestimonialsSection::Title, 255).not_null())
                    .col(string_len_null(TestimonialsSection::Subtitle, 512))
                    .col(boolean(TestimonialsSection::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(TestimonialsSection::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(pk_auto(Testimonial::Id))
                    .col(string_len(Testimonial::Name, 128).not_null())
                    .col(string_len_null(Testimonial::Role, 128))
                    .col(text(Testimonial::Quote).not_null())
                    .col(string_len_null(Testimonial::Image, 255))
                    .col(boolean(Testimonial::IsVisible).not_null().default(true))
                    .col(integer(Testimonial::Order).not_null().default(0))
                    .col(timestamp_with_time_zone(Testimonial::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrustedSection::Table)
                    .if_not_exists()
                    .col(pk_auto(TrustedSection::Id))
                    .col(string_len(TrustedSection::Title, 255).not_null())
                    .col(text(TrustedSection::Description).not_null().default(""))
                    .col(string_len_null(TrustedSection::Image, 255))
                    .col(boolean(TrustedSection::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(TrustedSection::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .if_not_exists()
                    .col(pk_auto(Faq::Id))
                    .col(string_len(Faq::Question, 255).not_null())
                    .col(text(Faq::Answer).not_null())
                    .col(integer(Faq::Order).not_null().default(0))
                    .col(boolean(Faq::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Faq::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Faq::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TrustedSection::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Testimonial::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TestimonialsSection::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(StatItem::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HomepageBanner::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(SupportFeature::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(InfoSection::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HeroBikeImage::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HeroSection::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HeroSection { Table, Id, Title, Description, ButtonText, TrapezoidImage, IsActive, Order, CreatedAt }

#[derive(DeriveIden)]
enum HeroBikeImage { Table, Id, HeroSectionId, Image, Order }

#[derive(DeriveIden)]
enum InfoSection { Table, Id, Description, ButtonText, BikeImage, IsActive, Order, CreatedAt }

#[derive(DeriveIden)]
enum SupportFeature { Table, Id, Title, Subtitle, Description, Image, ArrowImage, Arrow, IsActive, Order, CreatedAt }

#[derive(DeriveIden)]
enum HomepageBanner { Table, Id, Title, Logo, IsActive, CreatedAt }

#[derive(DeriveIden)]
enum StatItem { Table, Id, BannerId, Icon, Value, Caption, Order, IsVisible }

#[derive(DeriveIden)]
enum TestimonialsSection { Table, Id, Title, Subtitle, IsActive, CreatedAt }

#[derive(DeriveIden)]
enum Testimonial { Table, Id, Name, Role, Quote, Image, IsVisible, Order, CreatedAt }

#[derive(DeriveIden)]
enum TrustedSection { Table, Id, Title, Description, Image, IsActive, CreatedAt }

#[derive(DeriveIden)]
enum Faq { Table, Id, Question, Answer, Order, IsActive, CreatedAt }
