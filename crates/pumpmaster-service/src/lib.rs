//! # pumpmaster-service
//!
//! Business logic services for Pump Master. Each service receives a
//! [`context::RequestContext`] identifying the caller and derives the
//! row-level [`AccessScope`](pumpmaster_core::query::AccessScope) all
//! list queries run under.

pub mod auth;
pub mod context;
pub mod dashboard;
pub mod inspection;
pub mod pump;
