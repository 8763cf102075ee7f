//! The list-query pipeline: fetch, filter, count, sort, window.

use async_trait::async_trait;

use crate::result::AppResult;

use super::page::{self, Page};
use super::params::ListParams;
use super::predicate;
use super::registry::FieldRegistry;
use super::scope::{AccessScope, Record};
use super::sort;

/// Read-only row source for one entity collection.
///
/// `fetch` is the pipeline's only suspension point. Implementations may
/// narrow the result by the scope's owner in SQL; the engine re-applies
/// the full composed predicate regardless, so a store can over-fetch but
/// never widen visibility.
#[async_trait]
pub trait EntityStore<T>: Send + Sync {
    /// Fetch candidate rows for the given scope.
    async fn fetch(&self, scope: &AccessScope) -> AppResult<Vec<T>>;
}

/// Run one list query against a store.
///
/// Each invocation recomputes the count and page from scratch; nothing is
/// cached between requests. A store failure propagates unchanged, and a
/// dropped future yields no partial result.
pub async fn run<T, S>(
    store: &S,
    registry: &FieldRegistry<T>,
    scope: AccessScope,
    params: &ListParams,
) -> AppResult<Page<T>>
where
    T: Record + Send + 'static,
    S: EntityStore<T> + ?Sized,
{
    let rows = store.fetch(&scope).await?;

    let matches = predicate::build(scope, registry, params);
    let mut visible: Vec<T> = rows.into_iter().filter(|e| matches(e)).collect();

    sort::apply(&mut visible, registry, params);
    Ok(page::paginate(visible, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::params::SortDirection;
    use crate::query::registry::FieldAccessor;
    use uuid::Uuid;

    #[derive(Debug, Clone)]
    struct Asset {
        id: Uuid,
        name: String,
        owner: Uuid,
    }

    impl Record for Asset {
        fn id(&self) -> Uuid {
            self.id
        }
        fn owner_id(&self) -> Uuid {
            self.owner
        }
    }

    struct MemoryStore(Vec<Asset>);

    #[async_trait]
    impl EntityStore<Asset> for MemoryStore {
        async fn fetch(&self, _scope: &AccessScope) -> AppResult<Vec<Asset>> {
            Ok(self.0.clone())
        }
    }

    fn asset(id: u128, name: &str, owner: u128) -> Asset {
        Asset {
            id: Uuid::from_u128(id),
            name: name.to_string(),
            owner: Uuid::from_u128(owner),
        }
    }

    fn registry() -> FieldRegistry<Asset> {
        FieldRegistry::new()
            .sortable("name", |a: &Asset, b| a.name.cmp(&b.name))
            .field("name", FieldAccessor::Text(|a: &Asset| a.name.as_str()))
    }

    fn fleet() -> MemoryStore {
        MemoryStore(vec![
            asset(1, "Alpha", 1),
            asset(2, "Beta", 2),
            asset(3, "Gamma", 1),
        ])
    }

    #[tokio::test]
    async fn owner_scoped_caller_sees_only_their_rows() {
        let store = fleet();
        let scope = AccessScope::OwnedOnly(Uuid::from_u128(1));
        let result = run(&store, &registry(), scope, &ListParams::new(1, 10))
            .await
            .unwrap();

        assert_eq!(result.total_count, 2);
        assert_eq!(result.total_pages, 1);
        assert!(!result.has_next_page);
        let ids: Vec<u128> = result.data.iter().map(|a| a.id.as_u128()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn admin_scope_sees_every_row() {
        let store = fleet();
        let result = run(&store, &registry(), AccessScope::All, &ListParams::new(1, 10))
            .await
            .unwrap();

        assert_eq!(result.total_count, 3);
        let ids: Vec<u128> = result.data.iter().map(|a| a.id.as_u128()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn sorted_middle_page_has_both_neighbors() {
        let store = fleet();
        let params = ListParams::new(2, 1).with_sort("name", SortDirection::Asc);
        let result = run(&store, &registry(), AccessScope::All, &params)
            .await
            .unwrap();

        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].name, "Beta");
        assert_eq!(result.total_pages, 3);
        assert!(result.has_previous_page);
        assert!(result.has_next_page);
    }

    #[tokio::test]
    async fn unregistered_filter_key_returns_full_visible_set() {
        let store = fleet();
        let params = ListParams::new(1, 10).with_filter("area:North");
        let result = run(&store, &registry(), AccessScope::All, &params)
            .await
            .unwrap();

        assert_eq!(result.total_count, 3);
    }

    #[tokio::test]
    async fn unknown_sort_key_does_not_fail_the_pipeline() {
        let store = fleet();
        let params = ListParams::new(1, 10).with_sort("bogus", SortDirection::Desc);
        let result = run(&store, &registry(), AccessScope::All, &params)
            .await
            .unwrap();

        assert_eq!(result.total_count, 3);
    }

    #[tokio::test]
    async fn search_narrows_before_counting() {
        let store = fleet();
        let params = ListParams::new(1, 10).with_search("alp");
        let result = run(&store, &registry(), AccessScope::All, &params)
            .await
            .unwrap();

        assert_eq!(result.total_count, 1);
        assert_eq!(result.data[0].name, "Alpha");
    }
}
