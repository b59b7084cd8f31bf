//! Currency conversion.
//!
//! Freight rates are quoted in many currencies; routes are compared after
//! normalising every leg to a single base currency using the exchange
//! rates of the leg's departure date.

mod converter;

pub use converter::{CurrencyConverter, round_money};
