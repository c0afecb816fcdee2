//! User entity model.

use sqlx::FromRow;
use olay_core::types::DbId;

/// The subset of a `users` row the seeder needs.
///
/// `is_active` is read through `COALESCE(is_active, true)`, so a NULL
/// column counts as active.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub role: String,
    pub email: Option<String>,
    pub is_active: bool,
}
