//! Entity trait: identity that outlives attribute changes.

/// Entity marker + minimal interface.
///
/// An entity is the same thing across state changes because its id says so
/// (a product keeps its identity when its price moves). Compare entities by
/// id, value objects by value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
