//! Invoicing domain module.
//!
//! This crate contains the order aggregate behind an invoice and its pricing
//! rules, implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Time comes in through an injected [`mockable::Clock`].

pub mod account;
pub mod item;
pub mod number;
pub mod order;
pub mod payment;

pub use account::Account;
pub use item::Item;
pub use number::{ORDER_NUMBER_EXPECTATION, OrderNumber, RawOrderNumber};
pub use order::{NewOrder, Order};
pub use payment::PaymentInformation;
