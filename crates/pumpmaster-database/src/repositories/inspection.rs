//! Pump inspection repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use pumpmaster_core::error::{AppError, ErrorKind};
use pumpmaster_core::query::{AccessScope, EntityStore};
use pumpmaster_core::result::AppResult;
use pumpmaster_entity::inspection::{CreateInspection, InspectionStatus, PumpInspection};

/// Repository for inspection CRUD and aggregate operations.
#[derive(Debug, Clone)]
pub struct InspectionRepository {
    pool: PgPool,
}

impl InspectionRepository {
    /// Create a new inspection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Query-engine row store for one pump's inspections.
    pub fn for_pump(&self, pump_id: Uuid) -> PumpInspectionStore {
        PumpInspectionStore {
            pool: self.pool.clone(),
            pump_id,
        }
    }

    /// Record a new inspection.
    pub async fn create(&self, data: &CreateInspection) -> AppResult<PumpInspection> {
        sqlx::query_as::<_, PumpInspection>(
            "INSERT INTO pump_inspections (pump_id, inspector_id, inspection_date, notes, \
                                           pressure_reading, flow_rate_reading, status, \
                                           is_operational) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.pump_id)
        .bind(data.inspector_id)
        .bind(data.inspection_date)
        .bind(&data.notes)
        .bind(data.pressure_reading)
        .bind(data.flow_rate_reading)
        .bind(data.status)
        .bind(data.is_operational)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create inspection", e))
    }

    /// One pump's inspections since the cutoff, oldest first.
    pub async fn recent_for_pump(
        &self,
        pump_id: Uuid,
        cutoff: DateTime<Utc>,
    ) -> AppResult<Vec<PumpInspection>> {
        sqlx::query_as::<_, PumpInspection>(
            "SELECT * FROM pump_inspections \
             WHERE pump_id = $1 AND inspection_date >= $2 \
             ORDER BY inspection_date ASC",
        )
        .bind(pump_id)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load recent inspections", e)
        })
    }

    /// Count total inspections.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pump_inspections")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count inspections", e)
            })?;
        Ok(count as u64)
    }

    /// Count inspections performed since the cutoff.
    pub async fn count_since(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM pump_inspections WHERE inspection_date >= $1")
                .bind(cutoff)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to count recent inspections",
                        e,
                    )
                })?;
        Ok(count as u64)
    }

    /// Inspection counts grouped by status.
    pub async fn status_distribution(&self) -> AppResult<Vec<(InspectionStatus, i64)>> {
        sqlx::query_as::<_, (InspectionStatus, i64)>(
            "SELECT status, COUNT(*) FROM pump_inspections GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load status distribution", e)
        })
    }

    /// Pressure readings since the cutoff with pump names, oldest first.
    pub async fn recent_readings(
        &self,
        cutoff: DateTime<Utc>,
    ) -> AppResult<Vec<(DateTime<Utc>, f64, String)>> {
        sqlx::query_as::<_, (DateTime<Utc>, f64, String)>(
            "SELECT i.inspection_date, i.pressure_reading, p.name \
             FROM pump_inspections i JOIN pumps p ON p.id = i.pump_id \
             WHERE i.inspection_date >= $1 \
             ORDER BY i.inspection_date ASC",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load recent readings", e)
        })
    }
}

/// Row store scoped to one pump's inspections.
///
/// Produced by [`InspectionRepository::for_pump`] so the engine can page a
/// single pump's history without the repository growing query parameters.
#[derive(Debug, Clone)]
pub struct PumpInspectionStore {
    pool: PgPool,
    pump_id: Uuid,
}

#[async_trait]
impl EntityStore<PumpInspection> for PumpInspectionStore {
    async fn fetch(&self, scope: &AccessScope) -> AppResult<Vec<PumpInspection>> {
        let query = match scope.owner() {
            Some(owner) => sqlx::query_as::<_, PumpInspection>(
                "SELECT * FROM pump_inspections WHERE pump_id = $1 AND inspector_id = $2",
            )
            .bind(self.pump_id)
            .bind(owner),
            None => {
                sqlx::query_as::<_, PumpInspection>(
                    "SELECT * FROM pump_inspections WHERE pump_id = $1",
                )
                .bind(self.pump_id)
            }
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch inspections", e)
        })
    }
}
