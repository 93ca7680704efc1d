use anyhow::Context;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};
use std::path::Path;

use super::schema;

#[allow(async_fn_in_trait)]
pub trait FMDBConnection {
    async fn connect(&mut self) -> Result<(), anyhow::Error>;
    async fn check(&self) -> Result<(), anyhow::Error>;
    async fn close(&self) -> Result<(), anyhow::Error>;
}

/// Owns the single SQLite connection the tool works through.
pub struct SQLConnector {
    url: String,
    database_connection: Option<DatabaseConnection>,
}

impl SQLConnector {
    /// Connector for an existing database file; it is never created here.
    pub fn new(path: &Path) -> Self {
        SQLConnector {
            url: format!("sqlite://{}?mode=rw", path.display()),
            database_connection: None,
        }
    }

    /// Connector that creates the database file if needed.
    pub fn create(path: &Path) -> Self {
        SQLConnector {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            database_connection: None,
        }
    }

    pub fn in_memory() -> Self {
        SQLConnector {
            url: String::from("sqlite::memory:"),
            database_connection: None,
        }
    }

    pub fn connection(&self) -> Result<&DatabaseConnection, anyhow::Error> {
        self.database_connection
            .as_ref()
            .context("database is not connected")
    }

    pub async fn foreign_keys_enabled(&self) -> Result<bool, anyhow::Error> {
        let db = self.connection()?;
        let row = db
            .query_one(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA foreign_keys;",
            ))
            .await?
            .context("PRAGMA foreign_keys returned nothing")?;
        let enabled: i32 = row.try_get_by_index(0)?;
        Ok(enabled == 1)
    }

    pub async fn is_initialized(&self) -> Result<bool, anyhow::Error> {
        schema::is_initialized(self.connection()?)
            .await
            .context("failed to inspect schema")
    }

    pub async fn initialize(&self) -> Result<(), anyhow::Error> {
        schema::create_tables(self.connection()?)
            .await
            .context("failed to create schema")
    }
}

impl FMDBConnection for SQLConnector {
    async fn connect(&mut self) -> Result<(), anyhow::Error> {
        let mut options = ConnectOptions::new(self.url.clone());
        // One operator, one connection
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging_level(log::LevelFilter::Debug);
        let db = Database::connect(options).await?;

        // Referential integrity is off in SQLite unless asked for
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
        log::debug!("Connected to {}", self.url);

        self.database_connection = Some(db);
        Ok(())
    }
    async fn check(&self) -> Result<(), anyhow::Error> {
        if let Some(ref db) = self.database_connection {
            db.ping().await?;
            anyhow::ensure!(
                self.foreign_keys_enabled().await?,
                "foreign key enforcement is off"
            );
        }
        Ok(())
    }
    async fn close(&self) -> Result<(), anyhow::Error> {
        if let Some(ref db) = self.database_connection {
            let db = db.clone();
            db.close().await?;
        }
        Ok(())
    }
}
