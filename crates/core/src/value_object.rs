//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two values with the same attributes are
/// equal. They are immutable; "changing" one means building a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct TaxEntry {
///     description: String,
///     rate: Decimal,
/// }
///
/// impl ValueObject for TaxEntry {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
