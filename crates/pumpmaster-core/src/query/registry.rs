//! Per-entity whitelist of externally addressable fields.
//!
//! Each entity kind registers, at startup, the external keys a caller may
//! sort/search/filter by, mapped to strongly typed accessors and
//! comparators. Nothing outside these tables is ever reachable from
//! request input, so no query is ever built from raw caller strings.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};

/// Ordering function over an entity's internal field.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Typed accessor for a searchable/filterable field.
///
/// The variant doubles as the field's type tag: `Text` fields participate
/// in free-text search and exact-match filtering, every other variant in
/// filtering only.
pub enum FieldAccessor<T> {
    /// A string field.
    Text(fn(&T) -> &str),
    /// An enum field, exposed by variant name.
    Enum(fn(&T) -> &'static str),
    /// A numeric field.
    Numeric(fn(&T) -> f64),
    /// A timestamp field.
    Date(fn(&T) -> DateTime<Utc>),
    /// A boolean field.
    Bool(fn(&T) -> bool),
}

impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldAccessor<T> {}

/// Immutable per-entity-kind field tables, built once at startup.
///
/// External keys are matched case-insensitively; register them lowercase.
pub struct FieldRegistry<T> {
    sortable: HashMap<&'static str, Comparator<T>>,
    fields: HashMap<&'static str, FieldAccessor<T>>,
}

impl<T> FieldRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sortable: HashMap::new(),
            fields: HashMap::new(),
        }
    }

    /// Register a sortable field under an external key.
    pub fn sortable(mut self, key: &'static str, cmp: Comparator<T>) -> Self {
        debug_assert!(key == key.to_lowercase(), "register keys lowercase");
        self.sortable.insert(key, cmp);
        self
    }

    /// Register a searchable/filterable field under an external key.
    pub fn field(mut self, key: &'static str, accessor: FieldAccessor<T>) -> Self {
        debug_assert!(key == key.to_lowercase(), "register keys lowercase");
        self.fields.insert(key, accessor);
        self
    }

    /// Look up a comparator by external key (case-insensitive).
    pub fn comparator(&self, key: &str) -> Option<Comparator<T>> {
        self.sortable.get(key.to_lowercase().as_str()).copied()
    }

    /// Look up a field accessor by external key (case-insensitive).
    pub fn accessor(&self, key: &str) -> Option<FieldAccessor<T>> {
        self.fields.get(key.to_lowercase().as_str()).copied()
    }

    /// Iterate the accessors of all `Text` fields (the free-text search set).
    pub fn text_accessors(&self) -> impl Iterator<Item = fn(&T) -> &str> + '_ {
        self.fields.values().filter_map(|a| match a {
            FieldAccessor::Text(get) => Some(*get),
            _ => None,
        })
    }
}

impl<T> Default for FieldRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("sortable", &self.sortable.keys().collect::<Vec<_>>())
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget {
        name: String,
        weight: f64,
    }

    fn registry() -> FieldRegistry<Widget> {
        FieldRegistry::new()
            .sortable("name", |a: &Widget, b| a.name.cmp(&b.name))
            .sortable("weight", |a, b| a.weight.total_cmp(&b.weight))
            .field("name", FieldAccessor::Text(|w: &Widget| w.name.as_str()))
            .field("weight", FieldAccessor::Numeric(|w: &Widget| w.weight))
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let reg = registry();
        assert!(reg.comparator("NAME").is_some());
        assert!(reg.accessor("Weight").is_some());
    }

    #[test]
    fn unknown_keys_yield_none() {
        let reg = registry();
        assert!(reg.comparator("serial").is_none());
        assert!(reg.accessor("serial").is_none());
    }

    #[test]
    fn text_accessors_exclude_non_string_fields() {
        let reg = registry();
        assert_eq!(reg.text_accessors().count(), 1);
    }
}
