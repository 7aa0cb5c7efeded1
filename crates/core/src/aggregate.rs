//! Aggregate root trait for plain (non-event-sourced) domain models.

/// Aggregate root marker + minimal interface.
///
/// Intentionally small: identity only. State transitions and validation stay
/// with the concrete entity; there is no event sourcing and no audit log at
/// this level.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
