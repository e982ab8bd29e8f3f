/// Publishing-rule query shape and mock-backed reads
pub mod publish_tests;

/// Live database round trips; skipped without a reachable database
pub mod db_tests;

use sea_orm::DatabaseConnection;

/// Connects and migrates, or returns `None` when database tests are disabled
/// or no server is reachable.
pub(crate) async fn test_db() -> Option<DatabaseConnection> {
    use migration::MigratorTrait;

    if std::env::var("SKIP_DB_TESTS").is_ok() {
        println!("Skipping database tests (SKIP_DB_TESTS is set)");
        return None;
    }
    let db = match crate::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}
