//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_user;
mod m20240601_000002_create_catalog;
mod m20240601_000003_create_booking;
mod m20240601_000004_create_homepage_content;
mod m20240601_000005_create_contact;
mod m20240601_000006_create_auth_content;
mod m20240601_000007_create_about;
mod m20240601_000008_create_sell_page;
mod m20240601_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_user::Migration),
            Box::new(m20240601_000002_create_catalog::Migration),
            Box::new(m20240601_000003_create_booking::Migration),
            Box::new(m20240601_000004_create_homepage_content::Migration),
            Box::new(m20240601_000005_create_contact::Migration),
            Box::new(m20240601_000006_create_auth_content::Migration),
            Box::new(m20240601_000007_create_about::Migration),
            Box::new(m20240601_000008_create_sell_page::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000009_add_indexes::Migration),
        ]
    }
}
