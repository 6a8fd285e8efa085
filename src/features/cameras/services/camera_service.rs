use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::cameras::dtos::CameraResponseDto;
use crate::features::cameras::models::Camera;
use crate::features::incidents::models::Incident;

/// Service for camera listing
pub struct CameraService {
    pool: PgPool,
}

impl CameraService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every camera with its embedded incident collection
    pub async fn list_all(&self) -> Result<Vec<CameraResponseDto>> {
        let cameras = sqlx::query_as::<_, Camera>(
            r#"
            SELECT id, name, location
            FROM cameras
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cameras: {:?}", e);
            AppError::Database(e)
        })?;

        let incidents = sqlx::query_as::<_, Incident>(
            r#"
            SELECT id, camera_id, type, ts_start, ts_end, thumbnail_url, resolved
            FROM incidents
            ORDER BY ts_start DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list incidents for cameras: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(CameraResponseDto::group(cameras, incidents))
    }
}
