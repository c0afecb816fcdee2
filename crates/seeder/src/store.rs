//! The seeder's view of the database.
//!
//! [`EventStore`] covers exactly what one seeding run needs: two lookups
//! and a transaction of inserts. [`PgEventStore`] is the PostgreSQL
//! implementation; tests drive the seeder through an in-memory one.

use std::future::Future;

use olay_core::types::DbId;
use olay_db::models::event::CreateEvent;
use olay_db::models::incident_type::IncidentType;
use olay_db::models::user::User;
use olay_db::repositories::{EventRepo, IncidentTypeRepo, UserRepo};
use olay_db::{ConnectParams, DbPool};
use sqlx::{Postgres, Transaction};

use crate::error::SeedError;

pub trait EventStore: Send {
    /// Look up an active user by id.
    fn find_active_user(
        &mut self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<User>, sqlx::Error>> + Send;

    /// List all active incident types.
    fn list_active_incident_types(
        &mut self,
    ) -> impl Future<Output = Result<Vec<IncidentType>, sqlx::Error>> + Send;

    /// Open the transaction that subsequent inserts run in.
    fn begin(&mut self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Insert one event inside the open transaction.
    fn insert_event(
        &mut self,
        event: &CreateEvent,
    ) -> impl Future<Output = Result<DbId, sqlx::Error>> + Send;

    fn commit(&mut self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Discard the open transaction. A no-op when none is open.
    fn rollback(&mut self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Release the underlying connection.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}

/// [`EventStore`] backed by a single-connection PostgreSQL pool.
#[derive(Debug)]
pub struct PgEventStore {
    pool: DbPool,
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgEventStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool, tx: None }
    }

    /// Connect and health-check the database.
    ///
    /// Both failures are reported as [`SeedError::Connect`]; a pool that
    /// opened but failed the health check is closed before returning.
    pub async fn connect(params: &ConnectParams) -> Result<Self, SeedError> {
        let pool = olay_db::connect(params).await.map_err(SeedError::Connect)?;
        if let Err(e) = olay_db::health_check(&pool).await {
            pool.close().await;
            return Err(SeedError::Connect(e));
        }
        tracing::info!(database = %params.database, "Database connection established");
        Ok(Self::new(pool))
    }

    fn open_tx(&mut self) -> Result<&mut Transaction<'static, Postgres>, sqlx::Error> {
        self.tx
            .as_mut()
            .ok_or_else(|| sqlx::Error::Protocol("no open transaction".into()))
    }
}

impl EventStore for PgEventStore {
    async fn find_active_user(&mut self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_active(&self.pool, id).await
    }

    async fn list_active_incident_types(&mut self) -> Result<Vec<IncidentType>, sqlx::Error> {
        IncidentTypeRepo::list_active(&self.pool).await
    }

    async fn begin(&mut self) -> Result<(), sqlx::Error> {
        if self.tx.is_none() {
            self.tx = Some(self.pool.begin().await?);
            tracing::debug!("Transaction started");
        }
        Ok(())
    }

    async fn insert_event(&mut self, event: &CreateEvent) -> Result<DbId, sqlx::Error> {
        let tx = self.open_tx()?;
        EventRepo::insert(&mut **tx, event).await
    }

    async fn commit(&mut self) -> Result<(), sqlx::Error> {
        match self.tx.take() {
            Some(tx) => {
                tx.commit().await?;
                tracing::info!("Transaction committed");
                Ok(())
            }
            None => Err(sqlx::Error::Protocol("no open transaction".into())),
        }
    }

    async fn rollback(&mut self) -> Result<(), sqlx::Error> {
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
            tracing::warn!("Transaction rolled back");
        }
        Ok(())
    }

    async fn close(&mut self) {
        // Dropping an uncommitted transaction rolls it back.
        self.tx = None;
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn unreachable_server_is_a_connect_error() {
        let params = ConnectParams {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "nobody".to_string(),
            password: String::new(),
            database: "missing".to_string(),
        };

        let result = PgEventStore::connect(&params).await;
        assert_matches!(result, Err(SeedError::Connect(_)));
        if let Err(err) = result {
            assert!(err.to_string().starts_with("Connection failed:"));
        }
    }
}
