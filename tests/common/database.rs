//! Test database setup
#![allow(dead_code)]

use flightdesk::data::dbconnector::{FMDBConnection, SQLConnector};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

/// Fresh in-memory database with the flight schema and foreign keys on
pub async fn setup_test_database() -> SQLConnector {
    let mut connector = SQLConnector::in_memory();
    connector
        .connect()
        .await
        .expect("Failed to open in-memory database");
    connector
        .check()
        .await
        .expect("Database check failed");
    connector
        .initialize()
        .await
        .expect("Failed to create schema");
    connector
}

/// Row count of one table, e.g. `count::<flight::Entity>(db)`
pub async fn count<E>(db: &DatabaseConnection) -> u64
where
    E: EntityTrait,
    E::Model: Sync,
{
    E::find().count(db).await.expect("Failed to count rows")
}
