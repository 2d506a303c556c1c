//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two values with the same attributes are the same
/// value. In this workspace the calendar date is the prime example: an event's date can
/// be replaced wholesale by an update, but is never mutated piecemeal.
///
/// The trait requires:
/// - **Copy/Clone**: values are cheap to duplicate and safe to share across threads
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
