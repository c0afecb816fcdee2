//! Repository for the `olaylar` incident-type lookup table.

use sqlx::PgExecutor;

use crate::models::incident_type::IncidentType;

const COLUMNS: &str = "o_id, o_adi, good, COALESCE(active, true) AS active";

/// Read-only access to incident types.
pub struct IncidentTypeRepo;

impl IncidentTypeRepo {
    /// List every active incident type ordered by id. A NULL `active` counts as active.
    pub async fn list_active<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<IncidentType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM olaylar WHERE COALESCE(active, true) = true ORDER BY o_id");
        sqlx::query_as::<_, IncidentType>(&query)
            .fetch_all(executor)
            .await
    }
}
