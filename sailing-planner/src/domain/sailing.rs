//! Sailing types.
//!
//! A `Sailing` is one scheduled voyage between two ports. Dates are kept in
//! the string form they were loaded in; parsing happens on demand so that a
//! malformed date only disqualifies the sailing that carries it.

use std::fmt;

use chrono::NaiveDate;

use super::PortCode;

/// Error returned when parsing an invalid sailing code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sailing code: {reason}")]
pub struct InvalidSailingCode {
    reason: &'static str,
}

/// Unique identifier of a sailing within the catalog.
///
/// Sailing codes are opaque. The only validation is that they must be
/// non-empty.
///
/// # Examples
///
/// ```
/// use sailing_planner::domain::SailingCode;
///
/// let code = SailingCode::new("ABCD").unwrap();
/// assert_eq!(code.as_str(), "ABCD");
///
/// assert!(SailingCode::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SailingCode(String);

impl SailingCode {
    /// Create a new sailing code.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidSailingCode> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidSailingCode {
                reason: "sailing code cannot be empty",
            });
        }
        Ok(SailingCode(s))
    }

    /// Returns the sailing code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SailingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SailingCode({})", self.0)
    }
}

impl fmt::Display for SailingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// Returns `None` for anything that is not a valid date.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// A single scheduled leg between two ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sailing {
    /// Catalog identifier, also the key for the freight rate.
    pub code: SailingCode,
    /// Port the sailing departs from.
    pub origin: PortCode,
    /// Port the sailing arrives at.
    pub destination: PortCode,
    /// Departure date as loaded (ISO-8601), if present.
    pub departure_date: Option<String>,
    /// Arrival date as loaded (ISO-8601), if present.
    pub arrival_date: Option<String>,
}

impl Sailing {
    /// Creates a sailing with both dates present.
    pub fn new(
        code: SailingCode,
        origin: PortCode,
        destination: PortCode,
        departure_date: impl Into<String>,
        arrival_date: impl Into<String>,
    ) -> Self {
        Self {
            code,
            origin,
            destination,
            departure_date: Some(departure_date.into()),
            arrival_date: Some(arrival_date.into()),
        }
    }

    /// Parsed departure date, if present and well-formed.
    pub fn departure(&self) -> Option<NaiveDate> {
        self.departure_date.as_deref().and_then(parse_iso_date)
    }

    /// Parsed arrival date, if present and well-formed.
    pub fn arrival(&self) -> Option<NaiveDate> {
        self.arrival_date.as_deref().and_then(parse_iso_date)
    }

    /// Returns `(departure, arrival)` when both dates parse and the sailing
    /// does not arrive before it departs.
    ///
    /// A sailing without a schedule is malformed data and is never used as a
    /// route leg.
    pub fn schedule(&self) -> Option<(NaiveDate, NaiveDate)> {
        let departure = self.departure()?;
        let arrival = self.arrival()?;
        (arrival >= departure).then_some((departure, arrival))
    }

    /// The departure date string used as the exchange-rate lookup key.
    ///
    /// Empty when the sailing has no departure date, which never matches a
    /// table entry.
    pub fn rate_date(&self) -> &str {
        self.departure_date.as_deref().unwrap_or_default()
    }
}
