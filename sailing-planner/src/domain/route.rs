//! Route types.
//!
//! A `Route` is a complete trip from origin to destination made of one or
//! more chained sailings.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{DomainError, PortCode, Sailing, SailingCode};

/// An ordered, non-empty chain of sailings.
///
/// Uses `Arc<Sailing>` so partial routes can be cloned cheaply during
/// breadth-first search.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of the next)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    legs: Vec<Arc<Sailing>>,
}

impl Route {
    /// Constructs a route from its legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty or consecutive legs don't share a
    /// port.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use sailing_planner::domain::{PortCode, Route, Sailing, SailingCode};
    ///
    /// let leg = Sailing::new(
    ///     SailingCode::new("ABCD").unwrap(),
    ///     PortCode::parse("CNSHA").unwrap(),
    ///     PortCode::parse("NLRTM").unwrap(),
    ///     "2022-01-29",
    ///     "2022-02-12",
    /// );
    /// let route = Route::new(vec![Arc::new(leg)]).unwrap();
    ///
    /// assert_eq!(route.leg_count(), 1);
    /// assert_eq!(route.duration_days(), Some(14));
    /// ```
    pub fn new(legs: Vec<Arc<Sailing>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        for window in legs.windows(2) {
            let prev_dest = &window[0].destination;
            let next_origin = &window[1].origin;
            if prev_dest != next_origin {
                return Err(DomainError::LegsNotChained(
                    prev_dest.clone(),
                    next_origin.clone(),
                ));
            }
        }

        Ok(Route { legs })
    }

    /// Wraps legs the caller has already chained, such as a search path
    /// extended one connecting sailing at a time.
    pub(crate) fn from_chained(legs: Vec<Arc<Sailing>>) -> Self {
        debug_assert!(
            !legs.is_empty() && legs.windows(2).all(|w| w[0].destination == w[1].origin),
            "legs must be non-empty and chained"
        );
        Route { legs }
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Arc<Sailing>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if this is a single sailing.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    fn first(&self) -> &Sailing {
        // Safe: validated non-empty at construction
        &self.legs[0]
    }

    fn last(&self) -> &Sailing {
        &self.legs[self.legs.len() - 1]
    }

    /// Returns the origin port.
    pub fn origin(&self) -> &PortCode {
        &self.first().origin
    }

    /// Returns the destination port.
    pub fn destination(&self) -> &PortCode {
        &self.last().destination
    }

    /// Departure date of the first leg, if well-formed.
    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.first().departure()
    }

    /// Arrival date of the last leg, if well-formed.
    pub fn arrival_date(&self) -> Option<NaiveDate> {
        self.last().arrival()
    }

    /// Whole days from first departure to final arrival.
    ///
    /// `None` when either date is missing or unparseable.
    pub fn duration_days(&self) -> Option<i64> {
        let departure = self.departure_date()?;
        let arrival = self.arrival_date()?;
        Some(arrival.signed_duration_since(departure).num_days())
    }

    /// Sailing codes of every leg, in order.
    pub fn sailing_codes(&self) -> impl Iterator<Item = &SailingCode> {
        self.legs.iter().map(|leg| &leg.code)
    }

    /// Every port called at: the origin, then each leg's destination.
    pub fn ports(&self) -> impl Iterator<Item = &PortCode> {
        std::iter::once(self.origin()).chain(self.legs.iter().map(|leg| &leg.destination))
    }
}
