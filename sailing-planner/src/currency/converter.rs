//! Base-currency triangulating converter.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{ExchangeRateTable, PricingError};

/// Round a monetary amount to currency minor units (2 decimal places,
/// halves away from zero).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts amounts between currencies on a given date.
///
/// Every conversion goes through the base currency. Converting between two
/// non-base currencies rounds the intermediate base amount to 2 decimals
/// before converting onwards, so the result equals two explicit
/// conversions chained together.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sailing_planner::currency::CurrencyConverter;
/// use sailing_planner::domain::ExchangeRateTable;
///
/// let mut table = ExchangeRateTable::new();
/// table.insert("2022-01-01", "usd", Decimal::new(12, 1));
/// table.insert("2022-01-01", "gbp", Decimal::new(85, 2));
///
/// let converter = CurrencyConverter::new(&table, "EUR");
/// let gbp = converter
///     .convert(Decimal::from(100), "USD", "GBP", "2022-01-01")
///     .unwrap();
/// assert_eq!(gbp, Decimal::new(7083, 2));
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyConverter<'a> {
    rates: &'a ExchangeRateTable,
    base_currency: String,
}

impl<'a> CurrencyConverter<'a> {
    /// Create a converter over `rates` triangulating through `base_currency`.
    pub fn new(rates: &'a ExchangeRateTable, base_currency: impl Into<String>) -> Self {
        Self {
            rates,
            base_currency: base_currency.into(),
        }
    }

    /// The currency all conversions pass through.
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Convert `amount` from one currency to another at the rates of `date`.
    ///
    /// Same-currency conversion returns the amount unchanged without
    /// consulting the table.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Missing`] if the table has no entry for the
    /// date, or no usable rate for a currency involved, and
    /// [`PricingError::Overflow`] if the converted amount cannot be
    /// represented.
    pub fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
        date: &str,
    ) -> Result<Decimal, PricingError> {
        if from.eq_ignore_ascii_case(to) {
            return Ok(amount);
        }

        let overflow = || PricingError::Overflow(format!("converting {from} to {to} on {date}"));

        if from.eq_ignore_ascii_case(&self.base_currency) {
            let rate = self.rates.rate(date, to)?;
            let converted = amount.checked_mul(rate).ok_or_else(overflow)?;
            return Ok(round_money(converted));
        }

        if to.eq_ignore_ascii_case(&self.base_currency) {
            let rate = self.rates.rate(date, from)?;
            let converted = amount.checked_div(rate).ok_or_else(overflow)?;
            return Ok(round_money(converted));
        }

        let in_base = self.convert(amount, from, &self.base_currency, date)?;
        self.convert(in_base, &self.base_currency, to, date)
    }

    /// Convert `amount` into the base currency.
    pub fn to_base(&self, amount: Decimal, from: &str, date: &str) -> Result<Decimal, PricingError> {
        self.convert(amount, from, &self.base_currency, date)
    }
}
