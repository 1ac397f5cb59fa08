//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records owned by external systems (catalog products, customers) are still
/// entities here: their identity comes from the owning system.
pub trait Entity {
    /// Identifier type. May be `Option<_>` for records not yet persisted.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
