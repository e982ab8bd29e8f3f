//! Create `contact_config` and `contact_submission` tables.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactConfig::Id))
                    .col(string_len(ContactConfig::Heading, 255).not_null().default("Contact Us"))
                    .col(string_len_null(ContactConfig::Subheading, 512))
                    .col(text_null(ContactConfig::Address))
                    .col(string_len_null(ContactConfig::MapEmbedUrl, 1024))
                    .col(string_len_null(ContactConfig::Phone, 64))
                    .col(string_len_null(ContactConfig::Website, 255))
                    .col(string_len_null(ContactConfig::Email, 254))
                    .col(json_binary_null(ContactConfig::ReasonChoices))
                    .col(json_binary_null(ContactConfig::FoundUsChoices))
                    .col(boolean(ContactConfig::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(ContactConfig::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactSubmission::Id))
                    .col(integer_null(ContactSubmission::ConfigId))
                    .col(string_len(ContactSubmission::Name, 255).not_null())
                    .col(string_len(ContactSubmission::Email, 254).not_null())
                    .col(string_len_null(ContactSubmission::Phone, 64))
                    .col(string_len_null(ContactSubmission::Reason, 255))
                    .col(string_len_null(ContactSubmission::FoundUs, 255))
                    .col(text_null(ContactSubmission::Message))
                    .col(timestamp_with_time_zone(ContactSubmission::CreatedAt).not_null())
                    .col(boolean(ContactSubmission::SentEmail).not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_submission_config")
                            .from(ContactSubmission::Table, ContactSubmission::ConfigId)
                            .to(ContactConfig::Table, ContactConfig::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContactSubmission::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ContactConfig::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ContactConfig {
    Table,
    Id,
    Heading,
    Subheading,
    Address,
    MapEmbedUrl,
    Phone,
    Website,
    Email,
    ReasonChoices,
    FoundUsChoices,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ContactSubmission { Table, Id, ConfigId, Name, Email, Phone, Reason, FoundUs, Message, CreatedAt, SentEmail }
