//! # pumpmaster-auth
//!
//! Authentication building blocks for Pump Master: JWT access token
//! encoding/decoding and Argon2id password hashing with policy
//! enforcement. Refresh tokens are opaque database rows owned by the
//! service layer; only access tokens are JWTs.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
