//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Once built they
/// are never modified; deriving something new means constructing a new value.
///
/// Anything computed from a value object's attributes (for example the
/// category detected from an item name) is fixed at construction, so it
/// cannot drift from the value it was derived from.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemName {
///     value: String,
/// }
///
/// impl ValueObject for ItemName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
