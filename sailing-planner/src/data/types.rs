//! Catalog file DTOs.
//!
//! These types map directly onto the JSON data file. Dates stay as optional
//! strings because the catalog may contain sailings with missing or
//! malformed dates, which the planner skips rather than rejects.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The whole data file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    /// Every scheduled sailing.
    pub sailings: Vec<SailingDto>,

    /// Freight rates, one per sailing code.
    pub rates: Vec<RateDto>,

    /// Date -> currency -> units per base currency.
    pub exchange_rates: BTreeMap<String, BTreeMap<String, AmountDto>>,
}

/// One sailing record.
#[derive(Debug, Clone, Deserialize)]
pub struct SailingDto {
    pub origin_port: String,
    pub destination_port: String,
    /// ISO date; `null` is kept and makes the sailing unusable.
    pub departure_date: Option<String>,
    /// ISO date; `null` is kept and makes the sailing unusable.
    pub arrival_date: Option<String>,
    pub sailing_code: String,
}

/// One freight rate record.
#[derive(Debug, Clone, Deserialize)]
pub struct RateDto {
    pub sailing_code: String,
    /// Usually a decimal string such as `"589.30"`.
    pub rate: AmountDto,
    pub rate_currency: String,
}

/// A decimal amount written either as a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountDto {
    Text(String),
    Number(serde_json::Number),
}

impl AmountDto {
    /// The amount as written, for decimal parsing.
    pub fn as_text(&self) -> String {
        match self {
            AmountDto::Text(s) => s.trim().to_string(),
            AmountDto::Number(n) => n.to_string(),
        }
    }
}
