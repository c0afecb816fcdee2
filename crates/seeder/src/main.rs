//! `olay-seeder` -- fills the `olay` table with synthetic Ankara-area events.
//!
//! Asks for a user id and an event count, then inserts that many random
//! events on the user's behalf in a single transaction.
//!
//! # Environment variables
//!
//! | Variable     | Required | Description                     |
//! |--------------|----------|---------------------------------|
//! | `PGHOST`     | yes      | Database host                   |
//! | `PGPORT`     | yes      | Database port                   |
//! | `PGUSER`     | yes      | Database user                   |
//! | `PGPASSWORD` | yes      | Database password (may be empty)|
//! | `PGDATABASE` | yes      | Database name                   |
//!
//! A `.env` file in the working directory is loaded first if present.

use std::io;
use std::process::ExitCode;

use olay_seeder::config::SeederConfig;
use olay_seeder::console::Console;
use olay_seeder::error::SeedError;
use olay_seeder::seeder;
use olay_seeder::store::{EventStore, PgEventStore};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const BANNER_WIDTH: usize = 50;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never split a prompt on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "olay_seeder=info,olay_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    println!("{}", "=".repeat(BANNER_WIDTH));
    println!(" ANKARA RANDOM EVENT GENERATOR");
    println!("{}", "=".repeat(BANNER_WIDTH));

    let mut store = match connect().await {
        Ok(store) => store,
        Err(e) => return report(&e),
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let mut rng = rand::rng();

    let code = match seeder::run(&mut store, &mut console, &mut rng).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, rows = outcome.rows_written(), "Run finished");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    };

    store.close().await;
    println!("\nConnection closed");
    code
}

/// Load configuration and open the store.
async fn connect() -> Result<PgEventStore, SeedError> {
    let config = SeederConfig::from_env()?;

    tracing::info!(
        host = %config.db.host,
        port = config.db.port,
        database = %config.db.database,
        "Connecting to database",
    );

    let store = PgEventStore::connect(&config.db).await?;
    println!("\nDatabase connected: {}", config.db.database);
    Ok(store)
}

/// Print an error that ended the run and pick the exit code.
///
/// Only configuration errors fail the process; everything else is a
/// handled outcome.
fn report(err: &SeedError) -> ExitCode {
    tracing::error!(error = %err, "Run aborted");
    println!("\n{err}");
    match err {
        SeedError::Config(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
