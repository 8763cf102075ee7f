//! Request extractors.

pub mod auth;
pub mod list_query;

pub use auth::AuthUser;
pub use list_query::ListQueryParams;
