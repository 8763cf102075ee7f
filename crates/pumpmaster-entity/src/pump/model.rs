//! Pump entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use pumpmaster_core::query::Record;

use super::kind::PumpKind;

/// An irrigation pump in the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pump {
    /// Unique pump identifier.
    pub id: Uuid,
    /// Human-readable pump name.
    pub name: String,
    /// Mechanical design.
    pub kind: PumpKind,
    /// Field or zone the pump serves.
    pub area: String,
    /// Installation latitude.
    pub latitude: f64,
    /// Installation longitude.
    pub longitude: f64,
    /// Rated flow in litres per minute.
    pub flow_rate: f64,
    /// Vertical offset from the water table, metres.
    pub offset_m: f64,
    /// Most recent pressure reading, bar.
    pub current_pressure: f64,
    /// Minimum safe operating pressure, bar.
    pub min_pressure: f64,
    /// Maximum safe operating pressure, bar.
    pub max_pressure: f64,
    /// When the pump record was last updated.
    pub last_updated: DateTime<Utc>,
    /// Owning user.
    pub user_id: Uuid,
}

impl Pump {
    /// A pump is operational when its pressure sits inside the safe band.
    pub fn is_operational(&self) -> bool {
        self.current_pressure >= self.min_pressure && self.current_pressure <= self.max_pressure
    }
}

impl Record for Pump {
    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// Data required to create a new pump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePump {
    /// Pump name.
    pub name: String,
    /// Mechanical design.
    pub kind: PumpKind,
    /// Field or zone.
    pub area: String,
    /// Installation latitude.
    pub latitude: f64,
    /// Installation longitude.
    pub longitude: f64,
    /// Rated flow in litres per minute.
    pub flow_rate: f64,
    /// Vertical offset, metres.
    pub offset_m: f64,
    /// Current pressure, bar.
    pub current_pressure: f64,
    /// Minimum safe pressure, bar.
    pub min_pressure: f64,
    /// Maximum safe pressure, bar.
    pub max_pressure: f64,
    /// Owning user.
    pub user_id: Uuid,
}

/// Data for updating an existing pump; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePump {
    /// New name.
    pub name: Option<String>,
    /// New mechanical design.
    pub kind: Option<PumpKind>,
    /// New field or zone.
    pub area: Option<String>,
    /// New latitude.
    pub latitude: Option<f64>,
    /// New longitude.
    pub longitude: Option<f64>,
    /// New rated flow.
    pub flow_rate: Option<f64>,
    /// New vertical offset.
    pub offset_m: Option<f64>,
    /// New current pressure.
    pub current_pressure: Option<f64>,
    /// New minimum safe pressure.
    pub min_pressure: Option<f64>,
    /// New maximum safe pressure.
    pub max_pressure: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump(current: f64, min: f64, max: f64) -> Pump {
        Pump {
            id: Uuid::new_v4(),
            name: "North bore".to_string(),
            kind: PumpKind::Centrifugal,
            area: "North Field".to_string(),
            latitude: -27.4,
            longitude: 153.1,
            flow_rate: 120.0,
            offset_m: 2.0,
            current_pressure: current,
            min_pressure: min,
            max_pressure: max,
            last_updated: Utc::now(),
            user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn operational_inside_pressure_band() {
        assert!(pump(2.5, 2.0, 3.0).is_operational());
        assert!(pump(2.0, 2.0, 3.0).is_operational());
        assert!(!pump(1.9, 2.0, 3.0).is_operational());
        assert!(!pump(3.1, 2.0, 3.0).is_operational());
    }
}
