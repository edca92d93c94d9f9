//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two line items
//! with the same name, price and count are the same line item as far as the
//! domain is concerned.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Item { name: "Widget", price: 10.0, count: 1.0 }`)
/// - **Entity**: has identity (an `Order` is identified by its order number)
///
/// Value objects are not modified in place. To "change" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money {
///     amount: f64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
