use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use super::setup_test_db;
use crate::db::{connect_options, connect_with_config};

#[test]
fn connect_options_follow_config() {
    let cfg = DatabaseConfig { max_connections: 7, min_connections: 2, ..DatabaseConfig::in_memory() };
    let opts = connect_options(&cfg);
    assert_eq!(opts.get_url(), "sqlite::memory:");
    assert_eq!(opts.get_max_connections(), Some(7));
    assert_eq!(opts.get_min_connections(), Some(2));
    assert_eq!(opts.get_max_lifetime(), Some(std::time::Duration::from_secs(cfg.max_lifetime_secs)));
}

#[test]
fn in_memory_connection_is_never_recycled() {
    let year = std::time::Duration::from_secs(365 * 24 * 60 * 60);
    let opts = connect_options(&DatabaseConfig::in_memory());
    assert!(opts.get_max_lifetime().is_some_and(|d| d >= year));
    assert!(opts.get_idle_timeout().is_some_and(|d| d >= year));
    assert_eq!(opts.get_max_connections(), Some(1));
}

#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent_and_reversible() -> Result<()> {
    let db = setup_test_db().await?;
    // Second run finds nothing pending
    migration::Migrator::up(&db, None).await?;
    assert!(migration::Migrator::get_pending_migrations(&db).await?.is_empty());

    migration::Migrator::down(&db, None).await?;
    assert_eq!(migration::Migrator::get_pending_migrations(&db).await?.len(), 2);
    Ok(())
}
