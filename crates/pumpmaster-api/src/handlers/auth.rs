//! Auth handlers — register, login, refresh, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use pumpmaster_core::error::AppError;
use pumpmaster_entity::user::UserRole;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = req.role.unwrap_or(UserRole::Manager);
    let pair = state
        .auth_service
        .register(&req.username, &req.password, role)
        .await?;

    Ok(Json(ApiResponse::ok(pair.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let pair = state.auth_service.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(pair.into())))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let pair = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(pair.into())))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.profile(auth.context()).await?;

    Ok(Json(ApiResponse::ok(user.into())))
}
