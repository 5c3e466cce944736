//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object is defined entirely by its attributes: two instances with
/// the same values are the same value. [`Money`](crate::money::Money) is the
/// canonical case here — 1234 cents equals 1234 cents, wherever either came
/// from. Value objects stay immutable; "changing" one means constructing
/// another.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
