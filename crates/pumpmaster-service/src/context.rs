//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pumpmaster_core::query::AccessScope;
use pumpmaster_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the access token and passed into service methods so
/// that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
    /// The username (convenience field from JWT claims).
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, username: String) -> Self {
        Self {
            user_id,
            role,
            username,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// The row-level visibility scope for this caller.
    ///
    /// Admins see the whole fleet; everyone else only rows they own.
    pub fn access_scope(&self) -> AccessScope {
        if self.is_admin() {
            AccessScope::All
        } else {
            AccessScope::OwnedOnly(self.user_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_scope_is_unrestricted() {
        let ctx = RequestContext::new(Uuid::new_v4(), UserRole::Admin, "admin".to_string());
        assert_eq!(ctx.access_scope(), AccessScope::All);
    }

    #[test]
    fn non_admin_roles_are_owner_scoped() {
        for role in [UserRole::Manager, UserRole::Technician, UserRole::Inspector] {
            let id = Uuid::new_v4();
            let ctx = RequestContext::new(id, role, "someone".to_string());
            assert_eq!(ctx.access_scope(), AccessScope::OwnedOnly(id));
        }
    }
}
