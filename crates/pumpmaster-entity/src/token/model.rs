//! Refresh token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An opaque refresh token issued alongside a JWT access token.
///
/// Tokens are rotated on use: refreshing revokes the presented token and
/// records its replacement.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshToken {
    /// Unique token identifier.
    pub id: Uuid,
    /// The opaque token value handed to the client.
    #[serde(skip_serializing)]
    pub token: String,
    /// Owning user.
    pub user_id: Uuid,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// When the token was revoked, if it was.
    pub revoked_at: Option<DateTime<Utc>>,
    /// The token that replaced this one on rotation.
    pub replaced_by_token: Option<String>,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Whether the token has passed its expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Whether the token has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Whether the token can still be exchanged for a new pair.
    pub fn is_active(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(expires_in: Duration, revoked: bool) -> RefreshToken {
        RefreshToken {
            id: Uuid::new_v4(),
            token: "opaque".to_string(),
            user_id: Uuid::new_v4(),
            expires_at: Utc::now() + expires_in,
            revoked_at: revoked.then(Utc::now),
            replaced_by_token: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn fresh_token_is_active() {
        assert!(token(Duration::hours(1), false).is_active());
    }

    #[test]
    fn expired_or_revoked_token_is_inactive() {
        assert!(!token(Duration::hours(-1), false).is_active());
        assert!(!token(Duration::hours(1), true).is_active());
    }
}
