//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pumpmaster_entity::inspection::{InspectionStatus, PumpInspection};
use pumpmaster_entity::pump::{Pump, PumpKind};
use pumpmaster_entity::user::User;
use pumpmaster_service::auth::TokenPair;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Token pair issued on login, registration, or refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_at: pair.expires_at,
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Role.
    pub role: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Pump view model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PumpResponse {
    /// Pump ID.
    pub id: Uuid,
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
    /// Whether pressure sits inside the safe band.
    pub is_operational: bool,
    /// Last record update.
    pub last_updated: DateTime<Utc>,
    /// Owning user.
    pub user_id: Uuid,
}

impl From<Pump> for PumpResponse {
    fn from(pump: Pump) -> Self {
        let is_operational = pump.is_operational();
        Self {
            id: pump.id,
            name: pump.name,
            kind: pump.kind,
            area: pump.area,
            latitude: pump.latitude,
            longitude: pump.longitude,
            flow_rate: pump.flow_rate,
            offset_m: pump.offset_m,
            current_pressure: pump.current_pressure,
            min_pressure: pump.min_pressure,
            max_pressure: pump.max_pressure,
            is_operational,
            last_updated: pump.last_updated,
            user_id: pump.user_id,
        }
    }
}

/// Inspection view model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionResponse {
    /// Inspection ID.
    pub id: Uuid,
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
    /// Lifecycle state.
    pub status: InspectionStatus,
    /// Whether the pump was found operational.
    pub is_operational: bool,
}

impl From<PumpInspection> for InspectionResponse {
    fn from(i: PumpInspection) -> Self {
        Self {
            id: i.id,
            pump_id: i.pump_id,
            inspector_id: i.inspector_id,
            inspection_date: i.inspection_date,
            notes: i.notes,
            pressure_reading: i.pressure_reading,
            flow_rate_reading: i.flow_rate_reading,
            status: i.status,
            is_operational: i.is_operational,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database status.
    pub database: String,
}
