//! Fleet-wide dashboard statistics.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use pumpmaster_core::result::AppResult;
use pumpmaster_database::repositories::inspection::InspectionRepository;
use pumpmaster_database::repositories::pump::PumpRepository;

/// Window for "recent" inspection and pressure figures.
const RECENT_DAYS: i64 = 7;

/// Headline fleet counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Pumps in the fleet.
    pub total_pumps: u64,
    /// Pumps with pressure inside their safe band.
    pub operational_pumps: u64,
    /// Pumps outside their safe band.
    pub non_operational_pumps: u64,
    /// All inspections ever recorded.
    pub total_inspections: u64,
    /// Inspections in the trailing week.
    pub recent_inspections: u64,
}

/// A labelled count within a distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Group label.
    pub label: String,
    /// Row count for the group.
    pub count: i64,
}

/// A recent pressure reading with its pump's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressureReading {
    /// When the reading was taken.
    pub date: DateTime<Utc>,
    /// Pressure reading, bar.
    pub pressure: f64,
    /// Name of the pump inspected.
    pub pump_name: String,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Headline counts.
    pub summary: DashboardSummary,
    /// Pump counts by mechanical kind.
    pub pump_kinds: Vec<DistributionEntry>,
    /// Inspection counts by status.
    pub inspection_statuses: Vec<DistributionEntry>,
    /// Pump counts by area.
    pub area_distribution: Vec<DistributionEntry>,
    /// Pressure readings over the trailing week, oldest first.
    pub recent_pressure_readings: Vec<PressureReading>,
}

/// Computes dashboard statistics from fleet aggregates.
#[derive(Debug, Clone)]
pub struct DashboardService {
    pump_repo: Arc<PumpRepository>,
    inspection_repo: Arc<InspectionRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(pump_repo: Arc<PumpRepository>, inspection_repo: Arc<InspectionRepository>) -> Self {
        Self {
            pump_repo,
            inspection_repo,
        }
    }

    /// Assemble the full dashboard payload.
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let cutoff = Utc::now() - Duration::days(RECENT_DAYS);

        let total_pumps = self.pump_repo.count().await?;
        let operational_pumps = self.pump_repo.count_operational().await?;
        let total_inspections = self.inspection_repo.count().await?;
        let recent_inspections = self.inspection_repo.count_since(cutoff).await?;

        let pump_kinds = self
            .pump_repo
            .kind_distribution()
            .await?
            .into_iter()
            .map(|(kind, count)| DistributionEntry {
                label: kind.to_string(),
                count,
            })
            .collect();

        let inspection_statuses = self
            .inspection_repo
            .status_distribution()
            .await?
            .into_iter()
            .map(|(status, count)| DistributionEntry {
                label: status.to_string(),
                count,
            })
            .collect();

        let area_distribution = self
            .pump_repo
            .area_distribution()
            .await?
            .into_iter()
            .map(|(area, count)| DistributionEntry { label: area, count })
            .collect();

        let recent_pressure_readings = self
            .inspection_repo
            .recent_readings(cutoff)
            .await?
            .into_iter()
            .map(|(date, pressure, pump_name)| PressureReading {
                date,
                pressure,
                pump_name,
            })
            .collect();

        Ok(DashboardStats {
            summary: DashboardSummary {
                total_pumps,
                operational_pumps,
                non_operational_pumps: total_pumps.saturating_sub(operational_pumps),
                total_inspections,
                recent_inspections,
            },
            pump_kinds,
            inspection_statuses,
            area_distribution,
            recent_pressure_readings,
        })
    }
}
