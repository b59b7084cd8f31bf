//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Rate, Sailing};
use crate::output::format_amount;

/// Request to search for a route.
#[derive(Debug, Deserialize)]
pub struct SearchRoutesRequest {
    /// Origin port code
    pub origin: String,

    /// Destination port code
    pub destination: String,

    /// One of `cheapest-direct`, `cheapest`, `fastest`
    pub criteria: String,
}

/// A leg of the returned route.
///
/// `rate` and `rate_currency` are `null` for a sailing with no freight rate,
/// which only a `fastest` search can return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegResult {
    pub origin_port: String,
    pub destination_port: String,
    pub departure_date: Option<String>,
    pub arrival_date: Option<String>,
    pub sailing_code: String,
    /// Quoted rate, two decimals
    pub rate: Option<String>,
    pub rate_currency: Option<String>,
}

impl LegResult {
    pub fn new(sailing: &Sailing, rate: Option<&Rate>) -> Self {
        Self {
            origin_port: sailing.origin.to_string(),
            destination_port: sailing.destination.to_string(),
            departure_date: sailing.departure_date.clone(),
            arrival_date: sailing.arrival_date.clone(),
            sailing_code: sailing.code.to_string(),
            rate: rate.map(|r| format_amount(r.amount)),
            rate_currency: rate.map(|r| r.currency.clone()),
        }
    }
}

/// Response to a route search.
///
/// `route` is empty, and the totals are `null`, when no route exists.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRoutesResponse {
    /// Criterion that was applied
    pub criteria: String,

    /// Legs of the best route
    pub route: Vec<LegResult>,

    /// Total cost in `currency`, two decimals; `null` when there is no
    /// route, or a fastest route cannot be priced
    pub total_cost: Option<String>,

    /// Base currency of `total_cost`
    pub currency: String,

    /// Door-to-door days
    pub duration_days: Option<i64>,

    /// Number of routes tied with the one returned, including it
    pub tied_routes: usize,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
