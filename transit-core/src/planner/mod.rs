//! Itinerary planning.
//!
//! The transfer-bounded breadth-first search over scheduled trips, the
//! orderings applied to its results, and the static direct-route query.

mod config;
mod direct;
mod rank;
mod search;

pub use config::SearchConfig;
pub use direct::find_direct_routes;
pub use rank::{min_transfers_first, sort_by_duration};
pub use search::{Planner, TransitSource};
