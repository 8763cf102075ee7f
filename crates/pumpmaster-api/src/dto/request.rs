//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use pumpmaster_entity::inspection::InspectionStatus;
use pumpmaster_entity::pump::PumpKind;
use pumpmaster_entity::user::UserRole;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Plaintext password; policy is enforced by the auth service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Requested role; defaults to manager.
    pub role: Option<UserRole>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Create pump request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePumpRequest {
    /// Pump name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Mechanical design.
    pub kind: PumpKind,
    /// Field or zone.
    #[validate(length(min = 1, max = 100))]
    pub area: String,
    /// Installation latitude.
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Installation longitude.
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// Rated flow, litres per minute.
    pub flow_rate: f64,
    /// Vertical offset, metres.
    pub offset_m: f64,
    /// Current pressure, bar.
    pub current_pressure: f64,
    /// Minimum safe pressure, bar.
    pub min_pressure: f64,
    /// Maximum safe pressure, bar.
    pub max_pressure: f64,
}

/// Update pump request; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePumpRequest {
    /// New name.
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New mechanical design.
    pub kind: Option<PumpKind>,
    /// New field or zone.
    #[validate(length(min = 1, max = 100))]
    pub area: Option<String>,
    /// New latitude.
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    /// New longitude.
    #[validate(range(min = -180.0, max = 180.0))]
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

/// Record inspection request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInspectionRequest {
    /// The inspected pump.
    pub pump_id: Uuid,
    /// When the inspection took place.
    pub inspection_date: DateTime<Utc>,
    /// Free-form notes.
    #[validate(length(max = 500))]
    pub notes: Option<String>,
    /// Measured pressure, bar.
    pub pressure_reading: f64,
    /// Measured flow, litres per minute.
    pub flow_rate_reading: f64,
    /// Lifecycle state; defaults to completed.
    pub status: Option<InspectionStatus>,
    /// Whether the pump was found operational.
    pub is_operational: bool,
}

/// Pressure history window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressureHistoryQuery {
    /// Trailing window in days.
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    30
}
