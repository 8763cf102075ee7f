//! # pumpmaster-api
//!
//! HTTP API layer for Pump Master: the Axum router, shared application
//! state, request handlers, extractors, DTOs, and the mapping from
//! [`AppError`](pumpmaster_core::AppError) to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
