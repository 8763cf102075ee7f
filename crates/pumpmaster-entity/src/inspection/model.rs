//! Pump inspection entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use pumpmaster_core::query::Record;

use super::status::InspectionStatus;

/// One recorded inspection of a pump.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PumpInspection {
    /// Unique inspection identifier.
    pub id: Uuid,
    /// The pump that was inspected.
    pub pump_id: Uuid,
    /// The user who performed the inspection.
    pub inspector_id: Uuid,
    /// When the inspection took place.
    pub inspection_date: DateTime<Utc>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Measured pressure, bar.
    pub pressure_reading: f64,
    /// Measured flow, litres per minute.
    pub flow_rate_reading: f64,
    /// Inspection lifecycle state.
    pub status: InspectionStatus,
    /// Whether the pump was found operational.
    pub is_operational: bool,
}

impl Record for PumpInspection {
    fn id(&self) -> Uuid {
        self.id
    }

    // Inspections belong to the inspector who recorded them.
    fn owner_id(&self) -> Uuid {
        self.inspector_id
    }
}

/// Data required to record a new inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInspection {
    /// The inspected pump.
    pub pump_id: Uuid,
    /// The inspecting user.
    pub inspector_id: Uuid,
    /// When the inspection took place.
    pub inspection_date: DateTime<Utc>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Measured pressure, bar.
    pub pressure_reading: f64,
    /// Measured flow, litres per minute.
    pub flow_rate_reading: f64,
    /// Inspection lifecycle state.
    pub status: InspectionStatus,
    /// Whether the pump was found operational.
    pub is_operational: bool,
}
