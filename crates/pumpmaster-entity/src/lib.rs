//! # pumpmaster-entity
//!
//! Domain entity models for Pump Master: users, refresh tokens, pumps,
//! and pump inspections, together with their closed enums.

pub mod inspection;
pub mod pump;
pub mod token;
pub mod user;
