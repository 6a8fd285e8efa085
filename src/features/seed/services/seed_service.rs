use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::seed::dtos::SeedResponseDto;

const THUMB_UNAUTHORISED: &str = "/incidents/unauthorised.jpg";
const THUMB_GUN_THREAT: &str = "/incidents/gun-threat.jpg";
const THUMB_FACE: &str = "/incidents/face.jpg";
const THUMB_MULTIPLE: &str = "/incidents/multiple.jpg";
const THUMB_TRAFFIC: &str = "/incidents/traffic.jpg";

/// One planned incident row; `camera_index` points into the planned cameras
#[derive(Debug, Clone)]
pub struct IncidentSeed {
    pub camera_index: usize,
    pub incident_type: &'static str,
    pub ts_start: DateTime<Utc>,
    pub ts_end: DateTime<Utc>,
    pub thumbnail_url: &'static str,
    pub resolved: bool,
}

impl IncidentSeed {
    fn new(
        camera_index: usize,
        incident_type: &'static str,
        ts_start: DateTime<Utc>,
        duration: Duration,
        thumbnail_url: &'static str,
        resolved: bool,
    ) -> Self {
        Self {
            camera_index,
            incident_type,
            ts_start,
            ts_end: ts_start + duration,
            thumbnail_url,
            resolved,
        }
    }
}

/// The fixed demonstration cameras, as (name, location)
pub fn demo_cameras() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Shop Floor Camera A", "Main Building Ground Floor"),
        ("Camera - 02", "Basement Level B2"),
        ("Camera - 03", "Building Front"),
    ]
}

/// The fixed demonstration incidents.
///
/// Three groups: a cluster of unresolved incidents on one afternoon for the
/// list view, one day of spread-out incidents for the timeline view, and a
/// handful of resolved ones. Camera assignment for the generated rows is
/// round-robin so repeated fresh seeds produce identical data.
pub fn demo_incidents() -> Vec<IncidentSeed> {
    // Afternoon cluster for the incident list
    let list_base = Utc.with_ymd_and_hms(2025, 7, 7, 14, 35, 0).unwrap();
    // Single day feeding the timeline view
    let timeline_day = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap();
    // Resolved incidents sit months later
    let resolved_base = Utc.with_ymd_and_hms(2025, 11, 7, 3, 12, 37).unwrap();

    let two_minutes = Duration::minutes(2);
    let one_hour = Duration::hours(1);

    let mut incidents = vec![
        IncidentSeed::new(0, "Unauthorised Access", list_base, two_minutes, THUMB_UNAUTHORISED, false),
        IncidentSeed::new(0, "Gun Threat", list_base, two_minutes, THUMB_GUN_THREAT, false),
        IncidentSeed::new(0, "Unauthorised Access", list_base, two_minutes, THUMB_UNAUTHORISED, false),
        IncidentSeed::new(1, "Unauthorised Access", list_base, two_minutes, THUMB_UNAUTHORISED, false),
        IncidentSeed::new(0, "Unauthorised Access", list_base, two_minutes, THUMB_UNAUTHORISED, false),
    ];

    // Pad the list cluster out to 15 unresolved rows
    for i in 0..10 {
        incidents.push(IncidentSeed::new(
            i % 3,
            "Unauthorised Access",
            list_base,
            two_minutes,
            THUMB_UNAUTHORISED,
            false,
        ));
    }

    // Timeline rows across all three cameras
    let at = |hour: u32, minute: u32| timeline_day + Duration::minutes((hour * 60 + minute) as i64);
    incidents.extend([
        IncidentSeed::new(0, "Unauthorised Access", at(3, 0), one_hour, THUMB_UNAUTHORISED, false),
        IncidentSeed::new(0, "Face Recognised", at(14, 45), Duration::minutes(30), THUMB_FACE, false),
        IncidentSeed::new(0, "Multiple Events", at(9, 0), one_hour, THUMB_MULTIPLE, false),
        IncidentSeed::new(0, "Unauthorised Access", at(14, 0), one_hour, THUMB_UNAUTHORISED, false),
        IncidentSeed::new(0, "Gun Threat", at(15, 0), one_hour, THUMB_GUN_THREAT, false),
        IncidentSeed::new(1, "Unauthorised Access", at(3, 0), one_hour, THUMB_UNAUTHORISED, false),
        IncidentSeed::new(1, "Face Recognised", at(7, 0), one_hour, THUMB_FACE, false),
        IncidentSeed::new(1, "Unauthorised Access", at(14, 0), one_hour, THUMB_UNAUTHORISED, false),
        IncidentSeed::new(2, "Traffic congestion", at(6, 0), one_hour, THUMB_TRAFFIC, false),
        IncidentSeed::new(2, "Unauthorised Access", at(14, 0), one_hour, THUMB_UNAUTHORISED, false),
    ]);

    // Resolved rows
    for i in 0..4 {
        incidents.push(IncidentSeed::new(
            i % 3,
            "Unauthorised Access",
            resolved_base,
            one_hour,
            THUMB_UNAUTHORISED,
            true,
        ));
    }

    incidents
}

/// Service that populates the store with demonstration data
pub struct SeedService {
    pool: PgPool,
}

impl SeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Seed demonstration cameras and incidents.
    ///
    /// Idempotent: refuses to insert anything when incidents already exist.
    /// All inserts run in one transaction, so a failure partway leaves no
    /// partial data behind.
    pub async fn seed(&self) -> Result<SeedResponseDto> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM incidents")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count incidents before seeding: {:?}", e);
                AppError::Database(e)
            })?;

        if existing > 0 {
            tracing::info!("Seed skipped: {} incidents already present", existing);
            return Ok(SeedResponseDto::already_seeded(existing));
        }

        let cameras = demo_cameras();
        let incidents = demo_incidents();

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin seed transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let mut camera_ids = Vec::with_capacity(cameras.len());
        for (name, location) in &cameras {
            let id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO cameras (name, location)
                VALUES ($1, $2)
                RETURNING id
                "#,
            )
            .bind(*name)
            .bind(*location)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to seed camera '{}': {:?}", name, e);
                AppError::Database(e)
            })?;
            camera_ids.push(id);
        }

        for incident in &incidents {
            let camera_id = camera_ids.get(incident.camera_index).copied().ok_or_else(|| {
                AppError::Internal(format!(
                    "Seed plan references camera index {} out of range",
                    incident.camera_index
                ))
            })?;

            sqlx::query(
                r#"
                INSERT INTO incidents (camera_id, type, ts_start, ts_end, thumbnail_url, resolved)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(camera_id)
            .bind(incident.incident_type)
            .bind(incident.ts_start)
            .bind(incident.ts_end)
            .bind(incident.thumbnail_url)
            .bind(incident.resolved)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to seed incident: {:?}", e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit seed transaction: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Seeded {} cameras and {} incidents",
            cameras.len(),
            incidents.len()
        );

        Ok(SeedResponseDto::seeded(
            cameras.len() as i64,
            incidents.len() as i64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_three_cameras_and_twenty_nine_incidents() {
        assert_eq!(demo_cameras().len(), 3);
        assert_eq!(demo_incidents().len(), 29);
    }

    #[test]
    fn plan_has_expected_resolution_split() {
        let incidents = demo_incidents();
        let resolved = incidents.iter().filter(|i| i.resolved).count();
        let unresolved = incidents.iter().filter(|i| !i.resolved).count();

        assert_eq!(resolved, 4);
        assert_eq!(unresolved, 25);
    }

    #[test]
    fn every_planned_incident_references_a_seeded_camera() {
        let camera_count = demo_cameras().len();
        for incident in demo_incidents() {
            assert!(incident.camera_index < camera_count);
        }
    }

    #[test]
    fn planned_windows_never_end_before_they_start() {
        for incident in demo_incidents() {
            assert!(incident.ts_end >= incident.ts_start);
        }
    }

    #[test]
    fn list_cluster_has_fifteen_unresolved_rows() {
        let list_base = Utc.with_ymd_and_hms(2025, 7, 7, 14, 35, 0).unwrap();
        let cluster = demo_incidents()
            .into_iter()
            .filter(|i| i.ts_start == list_base)
            .count();

        assert_eq!(cluster, 15);
    }

    #[sqlx::test]
    async fn seeding_twice_does_not_duplicate_rows(pool: PgPool) {
        let service = SeedService::new(pool.clone());

        let first = service.seed().await.unwrap();
        assert_eq!(first.cameras_created, Some(3));
        assert_eq!(first.incidents_created, Some(29));

        let second = service.seed().await.unwrap();
        assert_eq!(second.count, Some(29));
        assert!(second.cameras_created.is_none());
        assert!(second.incidents_created.is_none());

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM incidents")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 29);
    }

    #[test]
    fn plan_is_deterministic() {
        let a = demo_incidents();
        let b = demo_incidents();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.camera_index, y.camera_index);
            assert_eq!(x.incident_type, y.incident_type);
            assert_eq!(x.ts_start, y.ts_start);
            assert_eq!(x.resolved, y.resolved);
        }
    }
}
