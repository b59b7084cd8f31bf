//! Breadth-first path enumeration over the sailing graph.
//!
//! Ports are nodes and sailings are directed edges. The search expands
//! partial paths level by level from an explicit FIFO queue, emitting every
//! path that reaches the destination within the leg bound. Sailings with
//! unusable dates are skipped rather than treated as errors.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::search::SearchError;
use crate::domain::{PortCode, Route, Sailing};

/// BFS state: partial path ending at a port.
struct Frontier<'a> {
    port: &'a PortCode,
    path: Vec<Arc<Sailing>>,
    /// Arrival date of the last leg; `None` before the first leg.
    available_from: Option<NaiveDate>,
}

impl Frontier<'_> {
    /// Returns true if `port` was already called at on this path,
    /// counting the search origin.
    fn has_visited(&self, origin: &PortCode, port: &PortCode) -> bool {
        origin == port || self.path.iter().any(|leg| &leg.destination == port)
    }
}

/// Sailings grouped by origin port, preserving catalog order.
fn index_by_origin(sailings: &[Arc<Sailing>]) -> HashMap<&PortCode, Vec<&Arc<Sailing>>> {
    let mut by_origin: HashMap<&PortCode, Vec<&Arc<Sailing>>> = HashMap::new();
    for sailing in sailings {
        by_origin.entry(&sailing.origin).or_default().push(sailing);
    }
    by_origin
}

/// Enumerate every route from `origin` to `destination` with at most
/// `max_legs` sailings.
///
/// A sailing extends a path only if its dates are well-formed, it departs
/// on or after the previous leg arrives, and it does not return to a port
/// already on the path (the destination itself may be reached once, as the
/// final stop). Routes are returned in discovery order; no route is an empty
/// list, not an error.
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] if `max_legs` is zero.
pub fn find_all_paths(
    sailings: &[Arc<Sailing>],
    origin: &PortCode,
    destination: &PortCode,
    max_legs: usize,
) -> Result<Vec<Route>, SearchError> {
    if max_legs == 0 {
        return Err(SearchError::InvalidArgument(
            "max_legs must be greater than 0".to_string(),
        ));
    }

    let by_origin = index_by_origin(sailings);
    let mut routes = Vec::new();
    let mut explored = 0usize;

    let mut queue: VecDeque<Frontier<'_>> = VecDeque::new();
    queue.push_back(Frontier {
        port: origin,
        path: Vec::new(),
        available_from: None,
    });

    while let Some(state) = queue.pop_front() {
        explored += 1;

        // Pruning: leg bound
        if state.path.len() >= max_legs {
            continue;
        }

        let Some(departures) = by_origin.get(state.port) else {
            continue;
        };

        for &sailing in departures {
            let Some((departs, arrives)) = sailing.schedule() else {
                trace!(sailing = %sailing.code, "skipping sailing with unusable dates");
                continue;
            };

            if state.available_from.is_some_and(|ready| departs < ready) {
                continue;
            }

            let reaches_destination = &sailing.destination == destination;
            if !reaches_destination && state.has_visited(origin, &sailing.destination) {
                continue;
            }

            let mut path = state.path.clone();
            path.push(Arc::clone(sailing));

            if reaches_destination {
                routes.push(Route::from_chained(path));
                continue;
            }

            queue.push_back(Frontier {
                port: &sailing.destination,
                path,
                available_from: Some(arrives),
            });
        }
    }

    debug!(
        origin = %origin,
        destination = %destination,
        max_legs,
        explored,
        routes = routes.len(),
        "path enumeration complete"
    );

    Ok(routes)
}

/// Single-sailing routes from `origin` to `destination`, in catalog order.
///
/// Sailings with unusable dates are skipped, as in [`find_all_paths`].
pub fn find_direct(
    sailings: &[Arc<Sailing>],
    origin: &PortCode,
    destination: &PortCode,
) -> Vec<Route> {
    sailings
        .iter()
        .filter(|s| &s.origin == origin && &s.destination == destination)
        .filter(|s| {
            let usable = s.schedule().is_some();
            if !usable {
                trace!(sailing = %s.code, "skipping direct sailing with unusable dates");
            }
            usable
        })
        .map(|s| Route::from_chained(vec![Arc::clone(s)]))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::SailingCode;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const PORTS: [&str; 5] = ["PAAAA", "PBBBB", "PCCCC", "PDDDD", "PEEEE"];

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
    }

    /// Random sailing between two of a handful of ports, over a month.
    fn sailing_strategy() -> impl Strategy<Value = (usize, usize, i64, i64)> {
        (0..PORTS.len(), 0..PORTS.len(), 0i64..30, 0i64..6)
    }

    fn network_strategy() -> impl Strategy<Value = Vec<Arc<Sailing>>> {
        prop::collection::vec(sailing_strategy(), 0..25).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (from, to, start, length))| {
                    let dep = base_date() + chrono::Duration::days(start);
                    let arr = dep + chrono::Duration::days(length);
                    Arc::new(Sailing::new(
                        SailingCode::new(format!("S{i:03}")).unwrap(),
                        PortCode::parse(PORTS[from]).unwrap(),
                        PortCode::parse(PORTS[to]).unwrap(),
                        dep.format("%Y-%m-%d").to_string(),
                        arr.format("%Y-%m-%d").to_string(),
                    ))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn routes_respect_invariants(
            sailings in network_strategy(),
            from in 0..PORTS.len(),
            to in 0..PORTS.len(),
            max_legs in 1usize..5,
        ) {
            let origin = PortCode::parse(PORTS[from]).unwrap();
            let destination = PortCode::parse(PORTS[to]).unwrap();

            let routes = find_all_paths(&sailings, &origin, &destination, max_legs).unwrap();

            for route in &routes {
                prop_assert!(route.leg_count() <= max_legs);
                prop_assert_eq!(route.origin(), &origin);
                prop_assert_eq!(route.destination(), &destination);

                for window in route.legs().windows(2) {
                    prop_assert_eq!(&window[0].destination, &window[1].origin);
                    prop_assert!(window[1].departure().unwrap() >= window[0].arrival().unwrap());
                }

                // Only the destination may close a loop, and only at the end
                let intermediate: Vec<&PortCode> = route
                    .ports()
                    .take(route.leg_count())
                    .collect();
                let unique: HashSet<&PortCode> = intermediate.iter().copied().collect();
                prop_assert_eq!(unique.len(), intermediate.len());
                if origin != destination {
                    prop_assert!(!intermediate.contains(&&destination));
                }
            }
        }

        #[test]
        fn direct_routes_are_single_legs(
            sailings in network_strategy(),
            from in 0..PORTS.len(),
            to in 0..PORTS.len(),
        ) {
            let origin = PortCode::parse(PORTS[from]).unwrap();
            let destination = PortCode::parse(PORTS[to]).unwrap();

            let direct = find_direct(&sailings, &origin, &destination);
            let one_leg = find_all_paths(&sailings, &origin, &destination, 1).unwrap();

            prop_assert!(direct.iter().all(Route::is_direct));
            prop_assert_eq!(direct, one_leg);
        }
    }
}
