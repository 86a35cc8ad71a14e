//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Cart lines and compare entries are entities keyed by their product id; the
/// list managers rely on this to enforce one entry per product.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
