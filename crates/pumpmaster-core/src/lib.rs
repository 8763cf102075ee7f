//! # pumpmaster-core
//!
//! Core crate for Pump Master. Contains the unified error system,
//! configuration schemas, and the authorization-scoped query engine
//! used by every list endpoint.
//!
//! This crate has **no** internal dependencies on other Pump Master crates.

pub mod config;
pub mod error;
pub mod query;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
