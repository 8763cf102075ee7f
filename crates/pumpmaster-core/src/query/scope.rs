//! Row-level visibility scope.

use uuid::Uuid;

/// Identity and ownership of a queryable entity.
///
/// `id` is the stable primary key used as the deterministic sort
/// tie-break; `owner_id` is the user the row belongs to for visibility
/// purposes.
pub trait Record {
    /// Primary key.
    fn id(&self) -> Uuid;
    /// Owning user.
    fn owner_id(&self) -> Uuid;
}

/// The rows a caller may see.
///
/// Computed fresh per request from the resolved caller identity. Admins
/// see everything; every other role is restricted to rows they own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// No restriction.
    All,
    /// Only rows whose owner matches the given user.
    OwnedOnly(Uuid),
}

impl AccessScope {
    /// Whether the scope admits the given entity.
    pub fn allows<T: Record>(&self, entity: &T) -> bool {
        match self {
            Self::All => true,
            Self::OwnedOnly(owner) => entity.owner_id() == *owner,
        }
    }

    /// The owner restriction, if any. Stores use this to narrow their
    /// fetch in SQL; the engine still re-applies the full predicate.
    pub fn owner(&self) -> Option<Uuid> {
        match self {
            Self::All => None,
            Self::OwnedOnly(owner) => Some(*owner),
        }
    }
}
