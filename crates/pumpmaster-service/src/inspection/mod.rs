//! Inspection service and field registry.

pub mod fields;
pub mod service;

pub use service::{InspectionService, PressurePoint};
