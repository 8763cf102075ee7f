//! End-to-end tests of the list-query pipeline over an in-memory store.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use pumpmaster_core::query::{
    AccessScope, EntityStore, FieldAccessor, FieldRegistry, ListParams, Record, SortDirection, run,
};
use pumpmaster_core::result::AppResult;

#[derive(Debug, Clone)]
struct Meter {
    id: Uuid,
    owner: Uuid,
    name: String,
    zone: String,
    model: &'static str,
    reading: f64,
    installed: DateTime<Utc>,
    online: bool,
}

impl Record for Meter {
    fn id(&self) -> Uuid {
        self.id
    }
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

struct MeterStore(Vec<Meter>);

#[async_trait]
impl EntityStore<Meter> for MeterStore {
    async fn fetch(&self, scope: &AccessScope) -> AppResult<Vec<Meter>> {
        // Mimic a SQL store that narrows by owner before the engine runs.
        Ok(self
            .0
            .iter()
            .filter(|m| scope.owner().is_none_or(|o| m.owner == o))
            .cloned()
            .collect())
    }
}

fn registry() -> FieldRegistry<Meter> {
    FieldRegistry::new()
        .sortable("name", |a: &Meter, b| a.name.cmp(&b.name))
        .sortable("reading", |a, b| a.reading.total_cmp(&b.reading))
        .sortable("installed", |a, b| a.installed.cmp(&b.installed))
        .field("name", FieldAccessor::Text(|m: &Meter| m.name.as_str()))
        .field("zone", FieldAccessor::Text(|m: &Meter| m.zone.as_str()))
        .field("model", FieldAccessor::Enum(|m: &Meter| m.model))
        .field("reading", FieldAccessor::Numeric(|m: &Meter| m.reading))
        .field("installed", FieldAccessor::Date(|m: &Meter| m.installed))
        .field("online", FieldAccessor::Bool(|m: &Meter| m.online))
}

fn meter(id: u128, owner: u128, name: &str, zone: &str, model: &'static str, reading: f64) -> Meter {
    Meter {
        id: Uuid::from_u128(id),
        owner: Uuid::from_u128(owner),
        name: name.to_string(),
        zone: zone.to_string(),
        model,
        reading,
        installed: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
        online: id % 2 == 0,
    }
}

fn store() -> MeterStore {
    MeterStore(vec![
        meter(1, 1, "Bore A", "North Field", "mk1", 2.5),
        meter(2, 1, "Bore B", "North Field", "mk2", 3.0),
        meter(3, 2, "Bore C", "South Field", "mk1", 1.5),
        meter(4, 2, "Channel D", "South Field", "mk2", 2.5),
        meter(5, 1, "Channel E", "East Field", "mk1", 4.0),
    ])
}

#[tokio::test]
async fn enum_filter_matches_case_insensitively() {
    let params = ListParams::new(1, 10).with_filter("model:MK1");
    let page = run(&store(), &registry(), AccessScope::All, &params)
        .await
        .unwrap();

    assert_eq!(page.total_count, 3);
    assert!(page.data.iter().all(|m| m.model == "mk1"));
}

#[tokio::test]
async fn numeric_filter_is_exact_match() {
    let params = ListParams::new(1, 10).with_filter("reading:2.5");
    let page = run(&store(), &registry(), AccessScope::All, &params)
        .await
        .unwrap();

    let ids: Vec<u128> = page.data.iter().map(|m| m.id.as_u128()).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[tokio::test]
async fn bool_filter_composes_with_search() {
    let params = ListParams::new(1, 10)
        .with_search("bore")
        .with_filter("online:true");
    let page = run(&store(), &registry(), AccessScope::All, &params)
        .await
        .unwrap();

    let ids: Vec<u128> = page.data.iter().map(|m| m.id.as_u128()).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn scoped_fetch_and_predicate_agree() {
    let params = ListParams::new(1, 10);
    let scope = AccessScope::OwnedOnly(Uuid::from_u128(2));
    let page = run(&store(), &registry(), scope, &params).await.unwrap();

    assert_eq!(page.total_count, 2);
    assert!(page.data.iter().all(|m| m.owner == Uuid::from_u128(2)));
}

#[tokio::test]
async fn sort_and_window_compose() {
    let params = ListParams::new(2, 2).with_sort("reading", SortDirection::Desc);
    let page = run(&store(), &registry(), AccessScope::All, &params)
        .await
        .unwrap();

    // Descending readings: 4.0, 3.0 | 2.5, 2.5 | 1.5 — page 2 holds the
    // tied 2.5s, ordered by id ascending.
    let ids: Vec<u128> = page.data.iter().map(|m| m.id.as_u128()).collect();
    assert_eq!(ids, vec![1, 4]);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_previous_page);
    assert!(page.has_next_page);
}

#[tokio::test]
async fn date_filter_matches_on_calendar_day() {
    let params = ListParams::new(1, 10).with_filter("installed:2025-03-01");
    let page = run(&store(), &registry(), AccessScope::All, &params)
        .await
        .unwrap();
    assert_eq!(page.total_count, 5);

    let params = ListParams::new(1, 10).with_filter("installed:2025-03-02");
    let page = run(&store(), &registry(), AccessScope::All, &params)
        .await
        .unwrap();
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn colon_bearing_filter_value_is_dropped_as_malformed() {
    // "installed:2025-03-01T08:00:00Z" splits into more than two tokens,
    // so the whole pair is discarded and the set stays unfiltered.
    let params = ListParams::new(1, 10).with_filter("installed:2025-03-01T08:00:00Z");
    let page = run(&store(), &registry(), AccessScope::All, &params)
        .await
        .unwrap();
    assert_eq!(page.total_count, 5);
}

#[tokio::test]
async fn search_is_restricted_to_text_fields() {
    // "mk1" appears only in the enum-tagged model field.
    let params = ListParams::new(1, 10).with_search("mk1");
    let page = run(&store(), &registry(), AccessScope::All, &params)
        .await
        .unwrap();

    assert_eq!(page.total_count, 0);
}
