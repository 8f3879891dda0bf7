//! Search configuration for the itinerary planner.

/// Limits applied by the itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Transfer bound used by the derived single-result queries
    /// (`find_fastest`, `find_minimal_transfers`).
    pub max_transfers: usize,

    /// Hard ceiling on dequeued search nodes per call. A circuit breaker
    /// against combinatorial blowup on dense networks; when it trips the
    /// search returns whatever it has found so far.
    pub max_iterations: usize,
}

impl SearchConfig {
    /// Creates a configuration with the given limits.
    pub fn new(max_transfers: usize, max_iterations: usize) -> Self {
        Self {
            max_transfers,
            max_iterations,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_transfers: 2,
            max_iterations: 10_000,
        }
    }
}
