//! Domain types for the sailing route planner.
//!
//! This module contains the core model: ports, sailings, freight rates,
//! exchange rates and routes. Identifier types enforce their invariants at
//! construction time; sailing dates are validated lazily so that bad data
//! can be skipped during search instead of failing the load.

mod error;
mod exchange;
mod port;
mod rate;
mod route;
mod sailing;

pub use error::{DomainError, PricingError, RateNotFound};
pub use exchange::ExchangeRateTable;
pub use port::{InvalidPortCode, PortCode};
pub use rate::{Rate, RateMap};
pub use route::Route;
pub use sailing::{InvalidSailingCode, Sailing, SailingCode, parse_iso_date};
