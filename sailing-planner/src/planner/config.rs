//! Search configuration for the route planner.

/// Default leg bound for multi-leg searches.
pub const DEFAULT_MAX_LEGS: usize = 4;

/// Default currency that costs are normalised to.
pub const DEFAULT_BASE_CURRENCY: &str = "EUR";

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of sailings in a route.
    /// Paths at this length are not extended further.
    pub max_legs: usize,

    /// Currency all costs are converted to before comparison.
    pub base_currency: String,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_legs: usize, base_currency: impl Into<String>) -> Self {
        Self {
            max_legs,
            base_currency: base_currency.into(),
        }
    }

    /// Returns a copy with a different leg bound.
    pub fn with_max_legs(mut self, max_legs: usize) -> Self {
        self.max_legs = max_legs;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_legs: DEFAULT_MAX_LEGS,
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
        }
    }
}
