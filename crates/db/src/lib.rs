//! Database access for the `olay` seeder: connection setup, row models
//! and repositories for `users`, `olaylar` and `olay`.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// How long [`connect`] waits for the server before giving up.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection parameters for a single PostgreSQL database.
#[derive(Debug, Clone)]
pub struct ConnectParams {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl ConnectParams {
    pub fn to_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Open a pool capped at one connection.
///
/// Everything the seeder does runs sequentially on that connection, and a
/// transaction begun on the pool owns it until commit or rollback.
pub async fn connect(params: &ConnectParams) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect_with(params.to_options())
        .await
}

/// Round-trip a trivial query to confirm the connection is usable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
