//! Pump handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use pumpmaster_core::error::AppError;
use pumpmaster_core::query::Page;
use pumpmaster_entity::pump::{CreatePump, UpdatePump};
use pumpmaster_entity::user::UserRole;

use crate::dto::request::{CreatePumpRequest, UpdatePumpRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PumpResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListQueryParams};
use crate::middleware::rbac::{require_admin, require_any};
use crate::state::AppState;

/// GET /api/pumps
pub async fn list_pumps(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Page<PumpResponse>>>, ApiError> {
    let params = query.into_params()?;
    let page = state.pump_service.list(auth.context(), &params).await?;

    Ok(Json(ApiResponse::ok(page.map(PumpResponse::from))))
}

/// GET /api/pumps/{id}
pub async fn get_pump(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PumpResponse>>, ApiError> {
    let pump = state.pump_service.get(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(pump.into())))
}

/// POST /api/pumps
pub async fn create_pump(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePumpRequest>,
) -> Result<Json<ApiResponse<PumpResponse>>, ApiError> {
    require_any(&auth, &[UserRole::Admin, UserRole::Manager])?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let pump = state
        .pump_service
        .create(
            auth.context(),
            CreatePump {
                name: req.name,
                kind: req.kind,
                area: req.area,
                latitude: req.latitude,
                longitude: req.longitude,
                flow_rate: req.flow_rate,
                offset_m: req.offset_m,
                current_pressure: req.current_pressure,
                min_pressure: req.min_pressure,
                max_pressure: req.max_pressure,
                user_id: auth.user_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(pump.into())))
}

/// PUT /api/pumps/{id}
pub async fn update_pump(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePumpRequest>,
) -> Result<Json<ApiResponse<PumpResponse>>, ApiError> {
    require_any(
        &auth,
        &[UserRole::Admin, UserRole::Manager, UserRole::Technician],
    )?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let pump = state
        .pump_service
        .update(
            auth.context(),
            id,
            UpdatePump {
                name: req.name,
                kind: req.kind,
                area: req.area,
                latitude: req.latitude,
                longitude: req.longitude,
                flow_rate: req.flow_rate,
                offset_m: req.offset_m,
                current_pressure: req.current_pressure,
                min_pressure: req.min_pressure,
                max_pressure: req.max_pressure,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(pump.into())))
}

/// DELETE /api/pumps/{id}
pub async fn delete_pump(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;

    state.pump_service.delete(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Pump deleted".to_string(),
    })))
}
