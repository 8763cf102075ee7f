//! Externally addressable fields of the inspection collection.

use std::sync::LazyLock;

use pumpmaster_core::query::{FieldAccessor, FieldRegistry};
use pumpmaster_entity::inspection::PumpInspection;

static REGISTRY: LazyLock<FieldRegistry<PumpInspection>> = LazyLock::new(|| {
    FieldRegistry::new()
        .sortable("date", |a: &PumpInspection, b| {
            a.inspection_date.cmp(&b.inspection_date)
        })
        .sortable("pressure", |a, b| {
            a.pressure_reading.total_cmp(&b.pressure_reading)
        })
        .sortable("flow", |a, b| {
            a.flow_rate_reading.total_cmp(&b.flow_rate_reading)
        })
        .sortable("status", |a, b| a.status.as_str().cmp(b.status.as_str()))
        .field(
            "notes",
            FieldAccessor::Text(|i: &PumpInspection| i.notes.as_deref().unwrap_or("")),
        )
        .field(
            "status",
            FieldAccessor::Enum(|i: &PumpInspection| i.status.as_str()),
        )
        .field(
            "operational",
            FieldAccessor::Bool(|i: &PumpInspection| i.is_operational),
        )
});

/// The process-wide inspection field registry.
pub fn registry() -> &'static FieldRegistry<PumpInspection> {
    &REGISTRY
}
