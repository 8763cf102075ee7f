//! Registration, login, and refresh-token rotation.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::info;

use pumpmaster_auth::jwt::JwtEncoder;
use pumpmaster_auth::password::{PasswordHasher, PasswordValidator};
use pumpmaster_core::config::AuthConfig;
use pumpmaster_core::error::AppError;
use pumpmaster_core::result::AppResult;
use pumpmaster_database::repositories::refresh_token::RefreshTokenRepository;
use pumpmaster_database::repositories::user::UserRepository;
use pumpmaster_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Tokens handed to a client after login, registration, or refresh.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived JWT access token.
    pub access_token: String,
    /// Opaque, rotating refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Handles account creation and credential exchange.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    token_repo: Arc<RefreshTokenRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
    refresh_ttl_hours: i64,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        token_repo: Arc<RefreshTokenRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            hasher,
            validator,
            encoder,
            refresh_ttl_hours: config.refresh_ttl_hours as i64,
        }
    }

    /// Register a new user and log them straight in.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<TokenPair> {
        self.validator.validate(password)?;

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        self.issue_pair(&user).await
    }

    /// Exchange credentials for a token pair.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenPair> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid username or password"));
        }

        info!(user_id = %user.id, "User logged in");

        self.issue_pair(&user).await
    }

    /// Exchange an active refresh token for a fresh pair, rotating it.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let stored = self
            .token_repo
            .find_by_token(refresh_token)
            .await?
            .ok_or_else(|| AppError::authentication("Unknown refresh token"))?;

        if !stored.is_active() {
            return Err(AppError::authentication("Refresh token is no longer valid"));
        }

        let user = self
            .user_repo
            .find_by_id(stored.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Token user no longer exists"))?;

        let pair = self.issue_pair(&user).await?;
        self.token_repo
            .revoke(stored.id, Some(&pair.refresh_token))
            .await?;

        Ok(pair)
    }

    /// Full profile of the authenticated caller.
    pub async fn profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Issue an access token plus a stored refresh token.
    async fn issue_pair(&self, user: &User) -> AppResult<TokenPair> {
        let (access_token, expires_at) =
            self.encoder
                .generate_access_token(user.id, user.role, &user.username)?;

        let refresh_token = generate_refresh_token();
        let refresh_expires = Utc::now() + Duration::hours(self.refresh_ttl_hours);
        self.token_repo
            .create(user.id, &refresh_token, refresh_expires)
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_at,
        })
    }
}

/// 256 bits of randomness, hex-encoded.
fn generate_refresh_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_tokens_are_unique_and_hex() {
        let a = generate_refresh_token();
        let b = generate_refresh_token();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(a.len() >= 64);
    }
}
