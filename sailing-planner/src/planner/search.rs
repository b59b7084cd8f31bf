//! Search orchestration.
//!
//! Composes candidate generation (direct filter or breadth-first traversal)
//! with evaluation and selection for one criterion.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use super::config::SearchConfig;
use super::criterion::Criterion;
use super::rank::{RouteEvaluator, select_best};
use super::traversal::{find_all_paths, find_direct};
use crate::currency::CurrencyConverter;
use crate::domain::{ExchangeRateTable, PortCode, PricingError, RateMap, RateNotFound, Route, Sailing};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search parameters
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A candidate could not be priced
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl From<RateNotFound> for SearchError {
    fn from(e: RateNotFound) -> Self {
        SearchError::Pricing(e.into())
    }
}

/// Request for a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Port the route starts from.
    pub origin: PortCode,

    /// Port the route ends at.
    pub destination: PortCode,

    /// What to optimise for.
    pub criterion: Criterion,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: PortCode, destination: PortCode, criterion: Criterion) -> Self {
        Self {
            origin,
            destination,
            criterion,
        }
    }
}

/// Result of a route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Every route tied at the optimum, in discovery order.
    pub routes: Vec<Route>,

    /// Number of candidates considered before selection.
    pub candidates: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            candidates: 0,
        }
    }

    /// The route presented to callers: the first of the winning set.
    pub fn best(&self) -> Option<&Route> {
        self.routes.first()
    }

    /// Consume the result, keeping only the presented route.
    pub fn into_best(self) -> Option<Route> {
        self.routes.into_iter().next()
    }

    /// Returns true if more than one route shares the optimum.
    pub fn is_tie(&self) -> bool {
        self.routes.len() > 1
    }
}

/// Cost and duration of a route, for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Total cost in `currency`.
    pub total_cost: Decimal,

    /// The base currency.
    pub currency: String,

    /// Door-to-door days, when the dates allow it.
    pub duration_days: Option<i64>,
}

/// Route planner over an in-memory catalog.
///
/// Holds only shared references, so one catalog can serve many concurrent
/// planners.
pub struct Planner<'a> {
    sailings: &'a [Arc<Sailing>],
    rates: &'a RateMap,
    exchange_rates: &'a ExchangeRateTable,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(
        sailings: &'a [Arc<Sailing>],
        rates: &'a RateMap,
        exchange_rates: &'a ExchangeRateTable,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            sailings,
            rates,
            exchange_rates,
            config,
        }
    }

    fn evaluator(&self) -> RouteEvaluator<'a> {
        let converter = CurrencyConverter::new(self.exchange_rates, &self.config.base_currency);
        RouteEvaluator::new(self.rates, converter)
    }

    /// Search for the best routes, keeping every tie.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] for a zero leg bound on a
    /// transfer search, and [`SearchError::Pricing`] if a candidate needed
    /// for a cost criterion cannot be priced.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        let candidates = if request.criterion.allows_transfers() {
            find_all_paths(
                self.sailings,
                &request.origin,
                &request.destination,
                self.config.max_legs,
            )?
        } else {
            find_direct(self.sailings, &request.origin, &request.destination)
        };

        let candidate_count = candidates.len();
        if candidate_count == 0 {
            debug!(
                origin = %request.origin,
                destination = %request.destination,
                criterion = %request.criterion,
                "no candidate routes"
            );
            return Ok(SearchResult::empty());
        }

        let routes = select_best(candidates, request.criterion, &self.evaluator())?;

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            criterion = %request.criterion,
            candidates = candidate_count,
            winners = routes.len(),
            "search complete"
        );

        Ok(SearchResult {
            routes,
            candidates: candidate_count,
        })
    }

    /// Search and return the single route to present, if any.
    pub fn find(&self, request: &SearchRequest) -> Result<Option<Route>, SearchError> {
        Ok(self.search(request)?.into_best())
    }

    /// Price and time a route in the base currency.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if any leg cannot be priced.
    pub fn summarize(&self, route: &Route) -> Result<RouteSummary, PricingError> {
        let evaluator = self.evaluator();
        Ok(RouteSummary {
            total_cost: evaluator.cost(route)?,
            currency: evaluator.currency().to_string(),
            duration_days: evaluator.duration(route),
        })
    }
}
