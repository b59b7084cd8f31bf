//! Daily exchange-rate table.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::RateNotFound;

/// Exchange rates by date and currency.
///
/// Each rate is expressed as units of the currency per one unit of the base
/// currency. Dates are keyed by their ISO string; currency codes are stored
/// lowercase so lookups are case-insensitive. A rate of 1 for the base
/// currency is expected on every date but not enforced.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sailing_planner::domain::ExchangeRateTable;
///
/// let mut table = ExchangeRateTable::new();
/// table.insert("2022-01-01", "usd", Decimal::new(12, 1));
///
/// assert_eq!(table.rate("2022-01-01", "USD").unwrap(), Decimal::new(12, 1));
/// assert!(table.rate("2022-01-02", "USD").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    by_date: HashMap<String, HashMap<String, Decimal>>,
}

impl ExchangeRateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rate of `currency` on `date`.
    pub fn insert(&mut self, date: impl Into<String>, currency: &str, rate: Decimal) {
        self.by_date
            .entry(date.into())
            .or_default()
            .insert(currency.to_ascii_lowercase(), rate);
    }

    /// Record a date with no quoted currencies.
    ///
    /// A date that is present but empty reports missing currencies rather
    /// than a missing date.
    pub fn insert_date(&mut self, date: impl Into<String>) {
        self.by_date.entry(date.into()).or_default();
    }

    /// Look up the rate of `currency` on `date`.
    ///
    /// A non-positive rate cannot be used for conversion and is reported the
    /// same way as an absent one. Errors echo the caller's currency casing.
    pub fn rate(&self, date: &str, currency: &str) -> Result<Decimal, RateNotFound> {
        let rates = self.by_date.get(date).ok_or_else(|| RateNotFound::Date {
            currency: currency.to_string(),
            date: date.to_string(),
        })?;

        rates
            .get(&currency.to_ascii_lowercase())
            .copied()
            .filter(|rate| *rate > Decimal::ZERO)
            .ok_or_else(|| RateNotFound::Currency {
                currency: currency.to_string(),
                date: date.to_string(),
            })
    }

    /// Returns the number of dates in the table.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns true if the table has no dates.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
