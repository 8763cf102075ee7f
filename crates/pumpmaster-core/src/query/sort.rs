//! Single-key sort resolution.

use super::params::{ListParams, SortDirection};
use super::registry::FieldRegistry;
use super::scope::Record;

/// Sort rows in place by the requested key, if it is registered.
///
/// An empty or unknown `sort_by` leaves the rows in store order. Rows that
/// compare equal on the primary key fall back to id ascending so a given
/// data set always pages the same way.
pub fn apply<T: Record>(rows: &mut [T], registry: &FieldRegistry<T>, params: &ListParams) {
    let Some(key) = params
        .sort_by
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
    else {
        return;
    };
    let Some(cmp) = registry.comparator(key) else {
        return;
    };

    let direction = params.sort_direction;
    rows.sort_by(|a, b| {
        let ord = match direction {
            SortDirection::Asc => cmp(a, b),
            SortDirection::Desc => cmp(a, b).reverse(),
        };
        ord.then_with(|| a.id().cmp(&b.id()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct Row {
        id: Uuid,
        name: String,
    }

    impl Record for Row {
        fn id(&self) -> Uuid {
            self.id
        }
        fn owner_id(&self) -> Uuid {
            Uuid::nil()
        }
    }

    fn row(id: u128, name: &str) -> Row {
        Row {
            id: Uuid::from_u128(id),
            name: name.to_string(),
        }
    }

    fn registry() -> FieldRegistry<Row> {
        FieldRegistry::new().sortable("name", |a, b| a.name.cmp(&b.name))
    }

    #[test]
    fn ascending_sort_is_non_decreasing() {
        let mut rows = vec![row(1, "Gamma"), row(2, "Alpha"), row(3, "Beta")];
        let params = ListParams::default().with_sort("name", SortDirection::Asc);
        apply(&mut rows, &registry(), &params);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn descending_sort_is_non_increasing() {
        let mut rows = vec![row(1, "Alpha"), row(2, "Gamma"), row(3, "Beta")];
        let params = ListParams::default().with_sort("name", SortDirection::Desc);
        apply(&mut rows, &registry(), &params);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Beta", "Alpha"]);
    }

    #[test]
    fn unknown_key_leaves_order_untouched() {
        let mut rows = vec![row(1, "Gamma"), row(2, "Alpha")];
        let params = ListParams::default().with_sort("serial", SortDirection::Asc);
        apply(&mut rows, &registry(), &params);
        assert_eq!(rows[0].name, "Gamma");
        assert_eq!(rows[1].name, "Alpha");
    }

    #[test]
    fn equal_keys_break_ties_by_id_ascending() {
        let mut rows = vec![row(9, "Same"), row(2, "Same"), row(5, "Same")];
        let params = ListParams::default().with_sort("name", SortDirection::Desc);
        apply(&mut rows, &registry(), &params);
        let ids: Vec<u128> = rows.iter().map(|r| r.id.as_u128()).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
