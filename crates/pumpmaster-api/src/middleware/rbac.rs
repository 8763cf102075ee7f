//! Role guards for handlers.

use pumpmaster_core::error::AppError;
use pumpmaster_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Require the caller to be an admin.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if !auth.is_admin() {
        return Err(AppError::authorization("Administrator access required"));
    }
    Ok(())
}

/// Require the caller to hold one of the given roles.
pub fn require_any(auth: &AuthUser, roles: &[UserRole]) -> Result<(), AppError> {
    if !roles.contains(&auth.role) {
        return Err(AppError::authorization(
            "Your role does not permit this action",
        ));
    }
    Ok(())
}
