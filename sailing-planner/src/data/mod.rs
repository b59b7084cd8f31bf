//! Catalog data file loading.
//!
//! The catalog is a single JSON document:
//!
//! ```json
//! {
//!   "sailings": [{ "origin_port": "CNSHA", "destination_port": "NLRTM",
//!                  "departure_date": "2022-02-01", "arrival_date": "2022-03-01",
//!                  "sailing_code": "ABCD" }],
//!   "rates": [{ "sailing_code": "ABCD", "rate": "589.30", "rate_currency": "USD" }],
//!   "exchange_rates": { "2022-02-01": { "usd": 1.126, "jpy": 130.15 } }
//! }
//! ```
//!
//! Missing keys and wrong container types fail the load. Sailings with
//! unusable dates are loaded as-is and skipped later by the planner.

mod catalog;
mod convert;
mod error;
mod types;

pub use catalog::{Catalog, load_catalog};
pub use convert::{parse_amount, validate_shape};
pub use error::DataError;
pub use types::{AmountDto, CatalogDocument, RateDto, SailingDto};
