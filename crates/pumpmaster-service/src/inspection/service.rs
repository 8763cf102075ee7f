//! Inspection recording and history.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use pumpmaster_core::error::AppError;
use pumpmaster_core::query::{self, ListParams, Page};
use pumpmaster_core::result::AppResult;
use pumpmaster_database::repositories::inspection::InspectionRepository;
use pumpmaster_database::repositories::pump::PumpRepository;
use pumpmaster_entity::inspection::{CreateInspection, PumpInspection};

use crate::context::RequestContext;

use super::fields;

/// One point in a pump's pressure history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressurePoint {
    /// When the reading was taken.
    pub date: DateTime<Utc>,
    /// Pressure reading, bar.
    pub pressure: f64,
    /// Flow reading, litres per minute.
    pub flow_rate: f64,
    /// Whether the pump was operational at the time.
    pub is_operational: bool,
}

/// Handles inspection operations.
#[derive(Debug, Clone)]
pub struct InspectionService {
    inspection_repo: Arc<InspectionRepository>,
    pump_repo: Arc<PumpRepository>,
}

impl InspectionService {
    /// Creates a new inspection service.
    pub fn new(inspection_repo: Arc<InspectionRepository>, pump_repo: Arc<PumpRepository>) -> Self {
        Self {
            inspection_repo,
            pump_repo,
        }
    }

    /// List one pump's inspections visible to the caller.
    ///
    /// Non-admin callers only see inspections they performed themselves.
    pub async fn list_for_pump(
        &self,
        ctx: &RequestContext,
        pump_id: Uuid,
        params: &ListParams,
    ) -> AppResult<Page<PumpInspection>> {
        self.require_pump(pump_id).await?;

        let store = self.inspection_repo.for_pump(pump_id);
        query::run(&store, fields::registry(), ctx.access_scope(), params).await
    }

    /// A pump's pressure readings over the trailing `days` window,
    /// oldest first.
    pub async fn pressure_history(
        &self,
        pump_id: Uuid,
        days: i64,
    ) -> AppResult<Vec<PressurePoint>> {
        self.require_pump(pump_id).await?;

        let cutoff = Utc::now() - Duration::days(days);
        let inspections = self
            .inspection_repo
            .recent_for_pump(pump_id, cutoff)
            .await?;

        Ok(inspections
            .into_iter()
            .map(|i| PressurePoint {
                date: i.inspection_date,
                pressure: i.pressure_reading,
                flow_rate: i.flow_rate_reading,
                is_operational: i.is_operational,
            })
            .collect())
    }

    /// Record an inspection performed by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateInspection,
    ) -> AppResult<PumpInspection> {
        self.require_pump(data.pump_id).await?;

        let inspection = self
            .inspection_repo
            .create(&CreateInspection {
                inspector_id: ctx.user_id,
                ..data
            })
            .await?;

        info!(
            inspection_id = %inspection.id,
            pump_id = %inspection.pump_id,
            inspector_id = %ctx.user_id,
            "Inspection recorded"
        );
        Ok(inspection)
    }

    async fn require_pump(&self, pump_id: Uuid) -> AppResult<()> {
        self.pump_repo
            .find_by_id(pump_id)
            .await?
            .ok_or_else(|| AppError::not_found("Pump not found"))?;
        Ok(())
    }
}
