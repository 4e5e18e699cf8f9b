//! Strongly-typed identifiers and the entity contract.
//!
//! Identity in this library is nominal: two identifiers are equal only if
//! they have the same concrete type *and* the same underlying value, so a
//! wallet id and an installment id never compare equal even when they wrap
//! identical strings. Implementors get this for free by deriving
//! `PartialEq`, `Eq`, and `Hash` on their id newtypes.

use std::fmt::Debug;
use std::hash::Hash;

/// A strongly-typed entity identifier.
///
/// Presence is type-level: an id that exists is an id with a value, so
/// there is no null state to guard against. Equality and hashing follow
/// the wrapped value within the concrete type.
pub trait EntityId: Debug + Clone + PartialEq + Eq + Hash {
    /// The wrapped value type.
    type Value;

    /// The underlying identifier value.
    fn value(&self) -> &Self::Value;
}

/// A domain object with a stable identity.
///
/// Entities are compared by identity, not by attribute values: two
/// snapshots of the same wallet are the same entity even when their
/// balances differ. Implementors keep their own equality conventions but
/// are expected to key them on [`Entity::id`].
pub trait Entity {
    /// The identifier type of this entity.
    type Id: EntityId;

    /// The stable identity of this entity.
    fn id(&self) -> &Self::Id;
}
