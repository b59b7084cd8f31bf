//! Route evaluation and selection.
//!
//! Candidates are scored per criterion (total cost in the base currency, or
//! door-to-door days) and reduced to the minimum. Exact ties are all kept,
//! in candidate order; choosing among them is left to the caller.

use rust_decimal::Decimal;

use super::criterion::Criterion;
use crate::currency::CurrencyConverter;
use crate::domain::{PricingError, RateMap, Route, Sailing};

/// Scores routes by cost and duration.
#[derive(Debug, Clone)]
pub struct RouteEvaluator<'a> {
    rates: &'a RateMap,
    converter: CurrencyConverter<'a>,
}

impl<'a> RouteEvaluator<'a> {
    /// Create an evaluator pricing sailings from `rates` through `converter`.
    pub fn new(rates: &'a RateMap, converter: CurrencyConverter<'a>) -> Self {
        Self { rates, converter }
    }

    /// The currency costs are reported in.
    pub fn currency(&self) -> &str {
        self.converter.base_currency()
    }

    /// Freight rate of one sailing in the base currency, converted at the
    /// rates of its departure date.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if the sailing has no freight rate, or the
    /// exchange-rate table cannot convert it.
    pub fn leg_cost(&self, sailing: &Sailing) -> Result<Decimal, PricingError> {
        let rate = self.rates.require(&sailing.code)?;
        self.converter
            .to_base(rate.amount, &rate.currency, sailing.rate_date())
    }

    /// Total cost of a route: the sum of its leg costs.
    ///
    /// The first leg that cannot be priced aborts the sum.
    pub fn cost(&self, route: &Route) -> Result<Decimal, PricingError> {
        route
            .legs()
            .iter()
            .try_fold(Decimal::ZERO, |total, leg| {
                let cost = self.leg_cost(leg)?;
                total
                    .checked_add(cost)
                    .ok_or_else(|| PricingError::Overflow(format!("adding the cost of {}", leg.code)))
            })
    }

    /// Door-to-door duration in whole days, or `None` when the route's
    /// dates are unusable.
    pub fn duration(&self, route: &Route) -> Option<i64> {
        route.duration_days()
    }
}

/// Keep every route whose score equals the minimum, in input order.
fn keep_minimum<K: Ord + Copy>(scored: Vec<(Route, K)>) -> Vec<Route> {
    let Some(best) = scored.iter().map(|(_, score)| *score).min() else {
        return Vec::new();
    };

    scored
        .into_iter()
        .filter(|(_, score)| *score == best)
        .map(|(route, _)| route)
        .collect()
}

/// Reduce `candidates` to the best route(s) for `criterion`.
///
/// - `CheapestDirect` considers single-leg candidates only, by cost.
/// - `Cheapest` minimises total cost.
/// - `Fastest` minimises duration; candidates without usable dates are
///   dropped rather than failing the selection.
///
/// Every route tied at the optimum is returned. An empty candidate set
/// gives an empty result.
///
/// # Errors
///
/// Returns [`PricingError`] if any cost-ranked candidate cannot be priced.
pub fn select_best(
    candidates: Vec<Route>,
    criterion: Criterion,
    evaluator: &RouteEvaluator<'_>,
) -> Result<Vec<Route>, PricingError> {
    match criterion {
        Criterion::CheapestDirect => {
            let direct = candidates.into_iter().filter(Route::is_direct);
            let scored = direct
                .map(|route| evaluator.cost(&route).map(|cost| (route, cost)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(keep_minimum(scored))
        }
        Criterion::Cheapest => {
            let scored = candidates
                .into_iter()
                .map(|route| evaluator.cost(&route).map(|cost| (route, cost)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(keep_minimum(scored))
        }
        Criterion::Fastest => {
            let scored = candidates
                .into_iter()
                .filter_map(|route| evaluator.duration(&route).map(|days| (route, days)))
                .collect();
            Ok(keep_minimum(scored))
        }
    }
}
