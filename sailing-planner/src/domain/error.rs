//! Domain error types.
//!
//! These errors represent validation failures and missing reference data
//! in the domain layer. They are distinct from loading and I/O errors.

use super::{PortCode, SailingCode};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no legs
    #[error("route must have at least one leg")]
    EmptyRoute,

    /// Consecutive legs don't share a port
    #[error("legs do not chain: arrival at {0} but next departure from {1}")]
    LegsNotChained(PortCode, PortCode),
}

/// A rate needed to price a route is absent.
///
/// Missing rates always abort the computation that needed them; a route is
/// never priced as free or as infinitely expensive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateNotFound {
    /// No freight rate is recorded for the sailing
    #[error("no rate found for sailing code {0}")]
    Freight(SailingCode),

    /// The exchange-rate table has no entries for the date
    #[error("no exchange rates for {date} (converting {currency})")]
    Date { currency: String, date: String },

    /// The date exists but the currency is not quoted on it
    #[error("no rate for {currency} on {date}")]
    Currency { currency: String, date: String },
}

/// A route or leg could not be priced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// A freight or exchange rate is absent
    #[error(transparent)]
    Missing(#[from] RateNotFound),

    /// An amount left the representable decimal range
    #[error("amount out of range while {0}")]
    Overflow(String),
}
