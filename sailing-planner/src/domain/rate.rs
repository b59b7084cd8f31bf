//! Freight rates.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{RateNotFound, SailingCode};

/// The freight price of one sailing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate {
    /// Sailing this rate prices.
    pub sailing_code: SailingCode,
    /// Non-negative price in `currency`.
    pub amount: Decimal,
    /// Currency code as loaded (case-insensitive).
    pub currency: String,
}

impl Rate {
    /// Creates a new rate.
    pub fn new(sailing_code: SailingCode, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            sailing_code,
            amount,
            currency: currency.into(),
        }
    }
}

/// Freight rates keyed by sailing code.
///
/// Built once when the catalog is loaded. If the same sailing code appears
/// more than once, the last rate wins.
#[derive(Debug, Clone, Default)]
pub struct RateMap {
    rates: HashMap<SailingCode, Rate>,
}

impl RateMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rate, replacing any previous rate for the same sailing.
    pub fn insert(&mut self, rate: Rate) {
        self.rates.insert(rate.sailing_code.clone(), rate);
    }

    /// Look up the rate for a sailing.
    pub fn get(&self, code: &SailingCode) -> Option<&Rate> {
        self.rates.get(code)
    }

    /// Look up the rate for a sailing, failing if it is absent.
    pub fn require(&self, code: &SailingCode) -> Result<&Rate, RateNotFound> {
        self.get(code)
            .ok_or_else(|| RateNotFound::Freight(code.clone()))
    }

    /// Returns the number of sailings with a rate.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rates are recorded.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<Rate> for RateMap {
    fn from_iter<I: IntoIterator<Item = Rate>>(iter: I) -> Self {
        let mut map = RateMap::new();
        for rate in iter {
            map.insert(rate);
        }
        map
    }
}
