use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::incidents::dtos::IncidentResponseDto;
use crate::features::incidents::models::IncidentWithCamera;

/// Service for incident queries and the resolve mutation
pub struct IncidentService {
    pool: PgPool,
}

impl IncidentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List incidents, newest first, optionally filtered by resolution state.
    ///
    /// A `None` filter returns everything. No pagination: the dashboard
    /// renders the full list.
    pub async fn list(&self, resolved: Option<bool>) -> Result<Vec<IncidentResponseDto>> {
        let rows = sqlx::query_as::<_, IncidentWithCamera>(
            r#"
            SELECT i.id, i.camera_id, i.type, i.ts_start, i.ts_end, i.thumbnail_url, i.resolved,
                   c.name AS camera_name, c.location AS camera_location
            FROM incidents i
            JOIN cameras c ON c.id = i.camera_id
            WHERE $1::boolean IS NULL OR i.resolved = $1
            ORDER BY i.ts_start DESC
            "#,
        )
        .bind(resolved)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list incidents: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Get a single incident with its camera embedded
    pub async fn get_by_id(&self, id: i32) -> Result<IncidentResponseDto> {
        let row = sqlx::query_as::<_, IncidentWithCamera>(
            r#"
            SELECT i.id, i.camera_id, i.type, i.ts_start, i.ts_end, i.thumbnail_url, i.resolved,
                   c.name AS camera_name, c.location AS camera_location
            FROM incidents i
            JOIN cameras c ON c.id = i.camera_id
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get incident {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        row.map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))
    }

    /// Mark an incident resolved.
    ///
    /// The transition is one-way and unconditional: resolving an
    /// already-resolved incident is a no-op success. Racing calls on the
    /// same id are last-write-wins.
    pub async fn resolve(&self, id: i32) -> Result<IncidentResponseDto> {
        let row = sqlx::query_as::<_, IncidentWithCamera>(
            r#"
            UPDATE incidents i
            SET resolved = TRUE
            FROM cameras c
            WHERE i.id = $1 AND c.id = i.camera_id
            RETURNING i.id, i.camera_id, i.type, i.ts_start, i.ts_end, i.thumbnail_url, i.resolved,
                      c.name AS camera_name, c.location AS camera_location
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve incident {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        let incident = row
            .map(IncidentResponseDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))?;

        tracing::info!("Incident resolved: id={}", id);

        Ok(incident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::seed::SeedService;

    async fn seed(pool: &PgPool) {
        SeedService::new(pool.clone()).seed().await.unwrap();
    }

    #[sqlx::test]
    async fn filtered_list_returns_only_matching_resolution(pool: PgPool) {
        seed(&pool).await;
        let service = IncidentService::new(pool);

        let unresolved = service.list(Some(false)).await.unwrap();
        assert_eq!(unresolved.len(), 25);
        assert!(unresolved.iter().all(|i| !i.resolved));

        let resolved = service.list(Some(true)).await.unwrap();
        assert_eq!(resolved.len(), 4);
        assert!(resolved.iter().all(|i| i.resolved));
    }

    #[sqlx::test]
    async fn unfiltered_list_is_sorted_newest_first(pool: PgPool) {
        seed(&pool).await;
        let incidents = IncidentService::new(pool).list(None).await.unwrap();

        assert_eq!(incidents.len(), 29);
        for pair in incidents.windows(2) {
            assert!(pair[0].ts_start >= pair[1].ts_start);
        }
    }

    #[sqlx::test]
    async fn resolve_is_idempotent_and_removes_from_unresolved_list(pool: PgPool) {
        seed(&pool).await;
        let service = IncidentService::new(pool);
        let before = service.list(Some(false)).await.unwrap();
        let id = before[0].id;

        let first = service.resolve(id).await.unwrap();
        assert!(first.resolved);
        let second = service.resolve(id).await.unwrap();
        assert!(second.resolved);

        let after = service.list(Some(false)).await.unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|i| i.id != id));
    }

    #[sqlx::test]
    async fn well_formed_missing_id_is_not_found(pool: PgPool) {
        seed(&pool).await;
        let service = IncidentService::new(pool);

        assert!(matches!(
            service.get_by_id(99_999).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.resolve(99_999).await,
            Err(AppError::NotFound(_))
        ));
    }
}
