//! Route planner.
//!
//! Answers "what is the best way to ship from this port to that one?" for
//! a chosen criterion. Candidate routes come either from a direct-sailing
//! filter or from a bounded breadth-first traversal of the sailing graph;
//! they are then priced (in the base currency) or timed, and reduced to the
//! optimum.

mod config;
mod criterion;
mod rank;
mod search;
mod traversal;


pub use config::{DEFAULT_BASE_CURRENCY, DEFAULT_MAX_LEGS, SearchConfig};
pub use criterion::{Criterion, UnknownCriterion};
pub use rank::{RouteEvaluator, select_best};
pub use search::{Planner, RouteSummary, SearchError, SearchRequest, SearchResult};
pub use traversal::{find_all_paths, find_direct};
