//! Event (`olay`) insert DTO.

use olay_core::geo::GeoPoint;
use olay_core::types::{DbId, Timestamp};

/// DTO for inserting a new `olay` row.
///
/// Creator fields are copied from the user at insert time; `olay` keeps
/// no live reference to `users`.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub location: GeoPoint,
    pub incident_type_id: DbId,
    pub description: String,
    pub created_by_name: String,
    pub created_by_role_name: String,
    pub created_by_id: DbId,
    pub created_at: Timestamp,
}
