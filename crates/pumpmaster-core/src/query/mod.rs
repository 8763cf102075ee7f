//! Authorization-scoped, paginated query engine for list endpoints.
//!
//! Every list endpoint runs the same pipeline: resolve the caller's
//! [`AccessScope`], compose it with free-text search and explicit filters
//! into a single [`Predicate`], fetch candidate rows through an
//! [`EntityStore`] (the only async suspension point), then count, sort,
//! and window the visible rows into a [`Page`].
//!
//! External sort/search/filter keys are only honored when registered in the
//! entity's [`FieldRegistry`]; unknown keys are dropped silently, never
//! surfaced as errors. Free-text search matches registered `Text` fields
//! only — enum, numeric, date, and bool fields are reachable through
//! `filter` but never through `search`.

pub mod engine;
pub mod page;
pub mod params;
pub mod predicate;
pub mod registry;
pub mod scope;
pub mod sort;

pub use engine::{EntityStore, run};
pub use page::{Page, paginate};
pub use params::{ListParams, SortDirection};
pub use predicate::Predicate;
pub use registry::{Comparator, FieldAccessor, FieldRegistry};
pub use scope::{AccessScope, Record};
