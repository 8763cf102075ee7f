//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pumpmaster_auth::jwt::JwtDecoder;
use pumpmaster_core::config::AppConfig;
use pumpmaster_database::connection::DatabasePool;
use pumpmaster_service::auth::AuthService;
use pumpmaster_service::dashboard::DashboardService;
use pumpmaster_service::inspection::InspectionService;
use pumpmaster_service::pump::PumpService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or pooled for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, used directly only by the health check.
    pub db: DatabasePool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration, login, and refresh.
    pub auth_service: Arc<AuthService>,
    /// Pump CRUD and listing.
    pub pump_service: Arc<PumpService>,
    /// Inspection recording and history.
    pub inspection_service: Arc<InspectionService>,
    /// Fleet statistics.
    pub dashboard_service: Arc<DashboardService>,
}
