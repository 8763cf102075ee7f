//! Inspection handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use pumpmaster_core::error::AppError;
use pumpmaster_core::query::Page;
use pumpmaster_entity::inspection::{CreateInspection, InspectionStatus};
use pumpmaster_service::inspection::PressurePoint;

use crate::dto::request::{CreateInspectionRequest, PressureHistoryQuery};
use crate::dto::response::{ApiResponse, InspectionResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListQueryParams};
use crate::state::AppState;

/// GET /api/pumps/{id}/inspections
pub async fn list_pump_inspections(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(pump_id): Path<Uuid>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Page<InspectionResponse>>>, ApiError> {
    let params = query.into_params()?;
    let page = state
        .inspection_service
        .list_for_pump(auth.context(), pump_id, &params)
        .await?;

    Ok(Json(ApiResponse::ok(page.map(InspectionResponse::from))))
}

/// GET /api/pumps/{id}/pressure-history
pub async fn pressure_history(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(pump_id): Path<Uuid>,
    Query(query): Query<PressureHistoryQuery>,
) -> Result<Json<ApiResponse<Vec<PressurePoint>>>, ApiError> {
    let history = state
        .inspection_service
        .pressure_history(pump_id, query.days)
        .await?;

    Ok(Json(ApiResponse::ok(history)))
}

/// POST /api/inspections
pub async fn create_inspection(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateInspectionRequest>,
) -> Result<Json<ApiResponse<InspectionResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let inspection = state
        .inspection_service
        .create(
            auth.context(),
            CreateInspection {
                pump_id: req.pump_id,
                inspector_id: auth.user_id,
                inspection_date: req.inspection_date,
                notes: req.notes,
                pressure_reading: req.pressure_reading,
                flow_rate_reading: req.flow_rate_reading,
                status: req.status.unwrap_or(InspectionStatus::Completed),
                is_operational: req.is_operational,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(inspection.into())))
}
