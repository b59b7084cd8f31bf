//! Application state for the web layer.

use std::sync::Arc;

use crate::data::Catalog;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The catalog is loaded once at startup and only read afterwards, so every
/// request searches the same `Arc` without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Sailings, rates and exchange rates
    pub catalog: Arc<Catalog>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
