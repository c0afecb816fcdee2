//! Incident-type lookup model (`olaylar`).

use sqlx::FromRow;
use olay_core::types::DbId;

/// A row from the `olaylar` lookup table.
#[derive(Debug, Clone, FromRow)]
pub struct IncidentType {
    #[sqlx(rename = "o_id")]
    pub id: DbId,
    #[sqlx(rename = "o_adi")]
    pub name: String,
    /// `true` for service events, `false` for dispatch events. Nullable in the schema.
    #[sqlx(rename = "good")]
    pub is_good: Option<bool>,
    pub active: bool,
}
