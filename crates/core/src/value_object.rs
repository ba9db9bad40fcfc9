//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two value
/// objects with the same attribute values are equal. Contrast with
/// [`crate::Entity`], where identity is what matters.
///
/// To "modify" a value object, build a new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
