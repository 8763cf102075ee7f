//! Pump entity.

pub mod kind;
pub mod model;

pub use kind::PumpKind;
pub use model::{CreatePump, Pump, UpdatePump};
