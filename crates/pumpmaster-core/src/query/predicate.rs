//! Predicate composition: access scope AND search AND filter.

use chrono::{DateTime, NaiveDate, Utc};

use super::params::ListParams;
use super::registry::{FieldAccessor, FieldRegistry};
use super::scope::{AccessScope, Record};

/// A boolean test deciding an entity's inclusion in a result set.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Compose the access scope, free-text search, and explicit filters into
/// one predicate.
///
/// Search ORs a case-insensitive contains over every registered `Text`
/// field. Filters AND in one typed equality condition per recognized
/// `key:value` pair; unknown keys, malformed pairs, and values that do not
/// parse for their field's type are dropped silently.
pub fn build<T: Record + 'static>(
    scope: AccessScope,
    registry: &FieldRegistry<T>,
    params: &ListParams,
) -> Predicate<T> {
    let mut parts: Vec<Predicate<T>> = Vec::new();

    parts.push(Box::new(move |e: &T| scope.allows(e)));

    if let Some(term) = params.search.as_deref().map(str::trim)
        && !term.is_empty()
    {
        if let Some(p) = search_predicate(registry, term) {
            parts.push(p);
        }
    }

    if let Some(raw) = params.filter.as_deref() {
        for (key, value) in parse_pairs(raw) {
            if let Some(accessor) = registry.accessor(&key)
                && let Some(p) = condition(accessor, &value)
            {
                parts.push(p);
            }
        }
    }

    Box::new(move |e: &T| parts.iter().all(|p| p(e)))
}

/// OR together a contains-ignore-case test over every `Text` field.
///
/// Returns `None` when no text fields are registered, in which case search
/// constrains nothing.
fn search_predicate<T: 'static>(registry: &FieldRegistry<T>, term: &str) -> Option<Predicate<T>> {
    let getters: Vec<fn(&T) -> &str> = registry.text_accessors().collect();
    if getters.is_empty() {
        return None;
    }
    let needle = term.to_lowercase();
    Some(Box::new(move |e: &T| {
        getters
            .iter()
            .any(|get| get(e).to_lowercase().contains(&needle))
    }))
}

/// Build one exact-match condition for a typed field, or `None` when the
/// value does not parse for the field's type.
fn condition<T: 'static>(accessor: FieldAccessor<T>, value: &str) -> Option<Predicate<T>> {
    match accessor {
        FieldAccessor::Text(get) => {
            let value = value.to_string();
            Some(Box::new(move |e: &T| get(e) == value))
        }
        FieldAccessor::Enum(get) => {
            let value = value.to_string();
            Some(Box::new(move |e: &T| get(e).eq_ignore_ascii_case(&value)))
        }
        FieldAccessor::Numeric(get) => {
            let wanted: f64 = value.parse().ok()?;
            Some(Box::new(move |e: &T| get(e) == wanted))
        }
        FieldAccessor::Date(get) => {
            // RFC 3339 timestamps carry colons and never survive pair
            // parsing, so date filters arrive as plain dates.
            if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
                let wanted = dt.with_timezone(&Utc);
                Some(Box::new(move |e: &T| get(e) == wanted))
            } else if let Ok(day) = value.parse::<NaiveDate>() {
                Some(Box::new(move |e: &T| get(e).date_naive() == day))
            } else {
                None
            }
        }
        FieldAccessor::Bool(get) => {
            let wanted = match value.to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => return None,
            };
            Some(Box::new(move |e: &T| get(e) == wanted))
        }
    }
}

/// Split a raw filter string into trimmed `(key, value)` pairs.
///
/// Pairs are comma-separated; each must contain exactly one colon. Keys
/// are lowercased. Anything malformed is skipped.
fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|segment| {
            let tokens: Vec<&str> = segment.split(':').collect();
            if tokens.len() != 2 {
                return None;
            }
            let key = tokens[0].trim().to_lowercase();
            let value = tokens[1].trim().to_string();
            if key.is_empty() {
                return None;
            }
            Some((key, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct Gauge {
        id: Uuid,
        owner: Uuid,
        label: String,
        zone: String,
        reading: f64,
        active: bool,
    }

    impl Record for Gauge {
        fn id(&self) -> Uuid {
            self.id
        }
        fn owner_id(&self) -> Uuid {
            self.owner
        }
    }

    fn registry() -> FieldRegistry<Gauge> {
        FieldRegistry::new()
            .field("label", FieldAccessor::Text(|g: &Gauge| g.label.as_str()))
            .field("zone", FieldAccessor::Text(|g: &Gauge| g.zone.as_str()))
            .field("reading", FieldAccessor::Numeric(|g: &Gauge| g.reading))
            .field("active", FieldAccessor::Bool(|g: &Gauge| g.active))
    }

    fn gauge(label: &str, zone: &str, reading: f64) -> Gauge {
        Gauge {
            id: Uuid::new_v4(),
            owner: Uuid::from_u128(7),
            label: label.to_string(),
            zone: zone.to_string(),
            reading,
            active: true,
        }
    }

    #[test]
    fn parse_pairs_drops_malformed_segments() {
        let pairs = parse_pairs("zone:North, label : main pump ,broken,too:many:colons");
        assert_eq!(
            pairs,
            vec![
                ("zone".to_string(), "North".to_string()),
                ("label".to_string(), "main pump".to_string()),
            ]
        );
    }

    #[test]
    fn search_matches_any_text_field_case_insensitively() {
        let reg = registry();
        let params = ListParams::default().with_search("NORTH");
        let pred = build(AccessScope::All, &reg, &params);
        assert!(pred(&gauge("well head", "North Field", 2.0)));
        assert!(!pred(&gauge("well head", "South Field", 2.0)));
    }

    #[test]
    fn search_never_matches_non_text_fields() {
        let reg = registry();
        let params = ListParams::default().with_search("true");
        let pred = build(AccessScope::All, &reg, &params);
        // `active` is true but Bool fields are outside the search set.
        assert!(!pred(&gauge("well head", "North", 2.0)));
    }

    #[test]
    fn filter_with_unregistered_key_is_ignored() {
        let reg = registry();
        let params = ListParams::default().with_filter("serial:XK-42");
        let pred = build(AccessScope::All, &reg, &params);
        assert!(pred(&gauge("anything", "anywhere", 0.0)));
    }

    #[test]
    fn filter_conditions_are_anded() {
        let reg = registry();
        let params = ListParams::default().with_filter("zone:North,active:true");
        let pred = build(AccessScope::All, &reg, &params);
        assert!(pred(&gauge("a", "North", 1.0)));
        assert!(!pred(&gauge("a", "South", 1.0)));
    }

    #[test]
    fn unparseable_numeric_value_drops_that_condition_only() {
        let reg = registry();
        let params = ListParams::default().with_filter("reading:not-a-number,zone:North");
        let pred = build(AccessScope::All, &reg, &params);
        assert!(pred(&gauge("a", "North", 123.0)));
        assert!(!pred(&gauge("a", "South", 123.0)));
    }

    #[test]
    fn scope_restricts_to_owned_rows() {
        let reg = registry();
        let params = ListParams::default();
        let pred = build(AccessScope::OwnedOnly(Uuid::from_u128(7)), &reg, &params);
        assert!(pred(&gauge("mine", "North", 1.0)));

        let pred = build(AccessScope::OwnedOnly(Uuid::from_u128(8)), &reg, &params);
        assert!(!pred(&gauge("not mine", "North", 1.0)));
    }
}
