//! In-memory sailing catalog.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::domain::{ExchangeRateTable, RateMap, Sailing};
use crate::planner::{Planner, SearchConfig};

use super::convert::{Converted, convert_document, validate_shape};
use super::error::DataError;
use super::types::CatalogDocument;

/// Sailings, freight rates and exchange rates, loaded once and then only
/// read.
///
/// Wrap in an `Arc` to share across concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Sailings in file order.
    pub sailings: Vec<Arc<Sailing>>,
    /// Freight rate per sailing code.
    pub rates: RateMap,
    /// Daily exchange rates.
    pub exchange_rates: ExchangeRateTable,
}

impl Catalog {
    /// Build a catalog from an already-parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self, DataError> {
        validate_shape(&value)?;
        let doc: CatalogDocument = serde_json::from_value(value)?;
        let Converted {
            sailings,
            rates,
            exchange_rates,
        } = convert_document(&doc)?;

        Ok(Self {
            sailings,
            rates,
            exchange_rates,
        })
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// A planner searching this catalog.
    pub fn planner<'a>(&'a self, config: &'a SearchConfig) -> Planner<'a> {
        Planner::new(&self.sailings, &self.rates, &self.exchange_rates, config)
    }
}

/// Load and validate the catalog stored at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, DataError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = Catalog::from_json_str(&contents)?;

    info!(
        path = %path.display(),
        sailings = catalog.sailings.len(),
        rates = catalog.rates.len(),
        exchange_dates = catalog.exchange_rates.len(),
        "loaded catalog"
    );

    Ok(catalog)
}
