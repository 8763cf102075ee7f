//! Externally addressable fields of the pump collection.

use std::sync::LazyLock;

use pumpmaster_core::query::{FieldAccessor, FieldRegistry};
use pumpmaster_entity::pump::Pump;

static REGISTRY: LazyLock<FieldRegistry<Pump>> = LazyLock::new(|| {
    FieldRegistry::new()
        .sortable("name", |a: &Pump, b| a.name.cmp(&b.name))
        .sortable("type", |a, b| a.kind.as_str().cmp(b.kind.as_str()))
        .sortable("area", |a, b| a.area.cmp(&b.area))
        .sortable("lat", |a, b| a.latitude.total_cmp(&b.latitude))
        .sortable("lng", |a, b| a.longitude.total_cmp(&b.longitude))
        .sortable("flow", |a, b| a.flow_rate.total_cmp(&b.flow_rate))
        .sortable("offset", |a, b| a.offset_m.total_cmp(&b.offset_m))
        .sortable("current", |a, b| {
            a.current_pressure.total_cmp(&b.current_pressure)
        })
        .sortable("min", |a, b| a.min_pressure.total_cmp(&b.min_pressure))
        .sortable("max", |a, b| a.max_pressure.total_cmp(&b.max_pressure))
        .sortable("lastupdated", |a, b| a.last_updated.cmp(&b.last_updated))
        .field("name", FieldAccessor::Text(|p: &Pump| p.name.as_str()))
        .field("type", FieldAccessor::Enum(|p: &Pump| p.kind.as_str()))
        .field("area", FieldAccessor::Text(|p: &Pump| p.area.as_str()))
});

/// The process-wide pump field registry.
pub fn registry() -> &'static FieldRegistry<Pump> {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_cover_the_documented_set() {
        for key in [
            "name",
            "type",
            "area",
            "lat",
            "lng",
            "flow",
            "offset",
            "current",
            "min",
            "max",
            "lastupdated",
        ] {
            assert!(registry().comparator(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn only_name_and_area_are_searchable_text() {
        assert_eq!(registry().text_accessors().count(), 2);
    }
}
