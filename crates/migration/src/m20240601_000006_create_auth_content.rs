//! Create `auth_page_config` and `auth_image` tables backing the login page.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthPageConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthPageConfig::Id))
                    .col(string_len_null(AuthPageConfig::RecipientEmail, 254))
                    .col(boolean(AuthPageConfig::SendWelcomeEmail).not_null().default(true))
                    .col(boolean(AuthPageConfig::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(AuthPageConfig::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuthImage::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthImage::Id))
                    .col(string_len_null(AuthImage::Title, 255))
                    .col(string_len(AuthImage::Image, 255).not_null())
                    .col(boolean(AuthImage::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(AuthImage::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AuthImage::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AuthPageConfig::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AuthPageConfig { Table, Id, RecipientEmail, SendWelcomeEmail, IsActive, CreatedAt }

#[derive(DeriveIden)]
enum AuthImage { Table, Id, Title, Image, IsActive, CreatedAt }
