pub mod menu;
pub mod printer;

use crate::data::configuration::{Configuration, DEFAULT_CONFIGURATION_PATH};
use crate::data::dbconnector::{FMDBConnection, SQLConnector};
use crate::data::seed;
use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info};
use menu::Menu;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIGURATION_PATH))]
    configuration_path: String,
    /// Database file, overriding the configuration
    #[arg(short, long)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Interactive flight menu
    #[default]
    Menu,
    /// Recreate the database with demo data
    Populate,
}

pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    debug!("Configuration path: {}", args.configuration_path);
    let config = Configuration::load_or_default(&args.configuration_path)
        .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", args.configuration_path))?;
    debug!("Loaded configuration: {config:?}");

    let database = args
        .database
        .unwrap_or_else(|| PathBuf::from(&config.database.path));

    match args.command.unwrap_or_default() {
        Command::Menu => run_menu(&config, &database).await,
        Command::Populate => populate(&database).await,
    }
}

async fn run_menu(config: &Configuration, database: &Path) -> anyhow::Result<()> {
    if !database.exists() {
        anyhow::bail!(
            "Database not found: {}\nRun: flightdesk populate",
            database.display()
        );
    }

    let mut db_connector = SQLConnector::new(database);
    db_connector.connect().await?;
    db_connector.check().await?;
    if !db_connector.is_initialized().await? {
        anyhow::bail!(
            "Database has no flight tables: {}\nRun: flightdesk populate",
            database.display()
        );
    }
    info!("Database is initialized");

    let db = db_connector.connection()?;
    let mut menu = Menu::new(db, &config.menu, io::stdin().lock(), io::stdout().lock());
    menu.run().await?;

    db_connector.close().await
}

async fn populate(database: &Path) -> anyhow::Result<()> {
    // Start from scratch every time
    if database.exists() {
        info!("Removing existing database {}", database.display());
        std::fs::remove_file(database)
            .with_context(|| format!("failed to remove {}", database.display()))?;
    }

    let mut db_connector = SQLConnector::create(database);
    db_connector.connect().await?;
    db_connector.check().await?;
    db_connector.initialize().await?;
    let summary = seed::populate(db_connector.connection()?).await?;
    db_connector.close().await?;

    println!(
        "Created and populated {} ({} flights, {} assignments)",
        database.display(),
        summary.flights,
        summary.assignments
    );
    Ok(())
}
