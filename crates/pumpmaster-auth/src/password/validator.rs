//! Password policy enforcement for new passwords.

use pumpmaster_core::config::AuthConfig;
use pumpmaster_core::error::AppError;

/// Maximum accepted password length.
const MAX_LENGTH: usize = 128;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.trim().is_empty() {
            return Err(AppError::validation("Password cannot be empty"));
        }

        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if password.len() > MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Password cannot exceed {MAX_LENGTH} characters"
            )));
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(AppError::validation(
                "Password must contain at least one uppercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(AppError::validation(
                "Password must contain at least one lowercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one number",
            ));
        }

        if !password.chars().any(|c| !c.is_alphanumeric()) {
            return Err(AppError::validation(
                "Password must contain at least one special character",
            ));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a stronger password with more entropy.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig {
            jwt_secret: "irrelevant".to_string(),
            jwt_access_ttl_minutes: 60,
            refresh_ttl_hours: 24,
            password_min_length: 8,
        })
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(validator().validate("Ab1!").is_err());
    }

    #[test]
    fn rejects_missing_character_classes() {
        let v = validator();
        assert!(v.validate("alllowercase1!").is_err());
        assert!(v.validate("ALLUPPERCASE1!").is_err());
        assert!(v.validate("NoDigitsHere!").is_err());
        assert!(v.validate("NoSpecials123").is_err());
    }

    #[test]
    fn accepts_a_strong_password() {
        assert!(validator().validate("Windmill$Creek47").is_ok());
    }
}
