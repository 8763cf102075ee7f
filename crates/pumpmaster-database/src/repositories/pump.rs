//! Pump repository implementation.
//!
//! Doubles as the query engine's row store for pumps: `fetch` narrows by
//! the scope's owner in SQL and the engine applies the rest of the
//! predicate in memory.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use pumpmaster_core::error::{AppError, ErrorKind};
use pumpmaster_core::query::{AccessScope, EntityStore};
use pumpmaster_core::result::AppResult;
use pumpmaster_entity::pump::{CreatePump, Pump, PumpKind, UpdatePump};

/// Repository for pump CRUD, aggregate, and query-store operations.
#[derive(Debug, Clone)]
pub struct PumpRepository {
    pool: PgPool,
}

impl PumpRepository {
    /// Create a new pump repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a pump by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Pump>> {
        sqlx::query_as::<_, Pump>("SELECT * FROM pumps WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find pump by id", e))
    }

    /// Create a new pump.
    pub async fn create(&self, data: &CreatePump) -> AppResult<Pump> {
        sqlx::query_as::<_, Pump>(
            "INSERT INTO pumps (name, kind, area, latitude, longitude, flow_rate, offset_m, \
                                current_pressure, min_pressure, max_pressure, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.kind)
        .bind(&data.area)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.flow_rate)
        .bind(data.offset_m)
        .bind(data.current_pressure)
        .bind(data.min_pressure)
        .bind(data.max_pressure)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create pump", e))
    }

    /// Update a pump's fields; unset fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdatePump) -> AppResult<Pump> {
        sqlx::query_as::<_, Pump>(
            "UPDATE pumps SET name = COALESCE($2, name), \
                              kind = COALESCE($3, kind), \
                              area = COALESCE($4, area), \
                              latitude = COALESCE($5, latitude), \
                              longitude = COALESCE($6, longitude), \
                              flow_rate = COALESCE($7, flow_rate), \
                              offset_m = COALESCE($8, offset_m), \
                              current_pressure = COALESCE($9, current_pressure), \
                              min_pressure = COALESCE($10, min_pressure), \
                              max_pressure = COALESCE($11, max_pressure), \
                              last_updated = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.kind)
        .bind(&data.area)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.flow_rate)
        .bind(data.offset_m)
        .bind(data.current_pressure)
        .bind(data.min_pressure)
        .bind(data.max_pressure)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update pump", e))?
        .ok_or_else(|| AppError::not_found(format!("Pump {id} not found")))
    }

    /// Delete a pump by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM pumps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete pump", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total pumps.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pumps")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count pumps", e))?;
        Ok(count as u64)
    }

    /// Count pumps whose pressure sits inside their safe band.
    pub async fn count_operational(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pumps \
             WHERE current_pressure >= min_pressure AND current_pressure <= max_pressure",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count operational pumps", e)
        })?;
        Ok(count as u64)
    }

    /// Pump counts grouped by mechanical kind.
    pub async fn kind_distribution(&self) -> AppResult<Vec<(PumpKind, i64)>> {
        sqlx::query_as::<_, (PumpKind, i64)>(
            "SELECT kind, COUNT(*) FROM pumps GROUP BY kind ORDER BY kind",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load kind distribution", e)
        })
    }

    /// Pump counts grouped by area.
    pub async fn area_distribution(&self) -> AppResult<Vec<(String, i64)>> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT area, COUNT(*) FROM pumps GROUP BY area ORDER BY area",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load area distribution", e)
        })
    }
}

#[async_trait]
impl EntityStore<Pump> for PumpRepository {
    async fn fetch(&self, scope: &AccessScope) -> AppResult<Vec<Pump>> {
        let query = match scope.owner() {
            Some(owner) => sqlx::query_as::<_, Pump>("SELECT * FROM pumps WHERE user_id = $1")
                .bind(owner),
            None => sqlx::query_as::<_, Pump>("SELECT * FROM pumps"),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch pumps", e))
    }
}
