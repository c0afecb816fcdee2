//! Repository for the `users` table.

use sqlx::PgExecutor;
use olay_core::types::DbId;

use crate::models::user::User;

/// Column list for `users` queries. A NULL `is_active` counts as active.
const COLUMNS: &str = "id, username, role, email, COALESCE(is_active, true) AS is_active";

/// Read-only access to users.
pub struct UserRepo;

impl UserRepo {
    /// Find an active user by id. Inactive users are reported as `None`.
    pub async fn find_active<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE id = $1 AND COALESCE(is_active, true) = true"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
