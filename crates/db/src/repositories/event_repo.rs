//! Repository for the `olay` events table.

use sqlx::PgExecutor;
use olay_core::geo::SRID;
use olay_core::types::DbId;

use crate::models::event::CreateEvent;

/// Write access to events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the generated `olay_id`.
    ///
    /// `geom` is built server-side from the same longitude/latitude that
    /// go into `boylam`/`enlem`. Photo and video lists start empty.
    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateEvent,
    ) -> Result<DbId, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO olay (
                enlem, boylam, olay_turu, aciklama, geom,
                created_by_name, created_by_role_name, created_by_id,
                active, photo_urls, video_urls, created_at
             ) VALUES (
                $1, $2, $3, $4, ST_SetSRID(ST_MakePoint($2, $1), $5),
                $6, $7, $8,
                true, '[]'::text, '[]'::text, $9
             )
             RETURNING olay_id",
        )
        .bind(input.location.lat)
        .bind(input.location.lng)
        .bind(input.incident_type_id)
        .bind(&input.description)
        .bind(SRID)
        .bind(&input.created_by_name)
        .bind(&input.created_by_role_name)
        .bind(input.created_by_id)
        .bind(input.created_at)
        .fetch_one(executor)
        .await?;

        tracing::debug!(olay_id = id, olay_turu = input.incident_type_id, "Event inserted");
        Ok(id)
    }

    /// Count events created by the given user.
    pub async fn count_by_creator<'e, E: PgExecutor<'e>>(
        executor: E,
        created_by_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM olay WHERE created_by_id = $1")
            .bind(created_by_id)
            .fetch_one(executor)
            .await
    }
}
