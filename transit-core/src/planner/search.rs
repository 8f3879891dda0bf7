//! Transfer-bounded itinerary search.
//!
//! A time-respecting breadth-first search over scheduled trips: from the
//! departure stop at the requested time, board any trip that has not yet
//! left, get off at any later stop it serves, and repeat until the
//! destination is reached or the transfer bound is exhausted.
//!
//! The search is the bounded variant of the algorithm: a visited set of
//! (stop, transfer count) pairs suppresses re-expansion, and a hard
//! dequeue ceiling caps runaway exploration on dense networks. Both
//! structures are local to one call.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::{ContainerError, DayTime, Journey, Route, RouteId, Trip, TripId};

use super::config::SearchConfig;
use super::direct;
use super::rank;

/// The network snapshot the planner reads.
///
/// This is the seam between the search and the entity store, and the
/// mock point for tests: the planner only ever asks which trips serve a
/// stop, what a trip's route looks like, and what routes exist.
pub trait TransitSource {
    /// Returns every trip with an arrival time recorded at the stop.
    fn trips_serving(&self, stop: &str) -> Vec<&Trip>;

    /// Looks up a route by id.
    fn route(&self, id: RouteId) -> Option<&Route>;

    /// Returns all routes.
    fn routes(&self) -> &[Route];
}

/// BFS state: a partial itinerary standing at a stop at a point in time.
#[derive(Debug, Clone)]
struct SearchState {
    /// Stop the traveller is currently at.
    stop: String,

    /// Clock at this stop: the requested departure time for the seed
    /// node, the riding trip's arrival time afterwards.
    time: DayTime,

    /// Trips ridden so far, in order.
    legs: Vec<TripId>,

    /// Boarding stops of every leg after the first.
    transfer_stops: Vec<String>,

    /// Number of changes of trip made so far.
    transfers: usize,
}

/// Itinerary planner over a network snapshot.
pub struct Planner<'a, S: TransitSource> {
    source: &'a S,
    config: SearchConfig,
}

impl<'a, S: TransitSource> Planner<'a, S> {
    /// Creates a planner with the default limits.
    pub fn new(source: &'a S) -> Self {
        Self::with_config(source, SearchConfig::default())
    }

    /// Creates a planner with explicit limits.
    pub fn with_config(source: &'a S, config: SearchConfig) -> Self {
        Self { source, config }
    }

    /// Finds itineraries from `start` to `end` departing at or after
    /// `departure`, using at most `max_transfers` changes of trip.
    ///
    /// Results are sorted by ascending total duration (stable, so equal
    /// durations keep discovery order). Returns an empty vector when no
    /// itinerary exists — including when `start == end`, since a journey
    /// must ride at least one trip.
    pub fn find_itineraries(
        &self,
        start: &str,
        end: &str,
        departure: DayTime,
        max_transfers: usize,
    ) -> Vec<Journey> {
        rank::sort_by_duration(self.search(start, end, departure, max_transfers))
    }

    /// Finds the fastest itinerary at the configured transfer bound.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::NoItinerary` when nothing connects the
    /// stops within the bound.
    pub fn find_fastest(
        &self,
        start: &str,
        end: &str,
        departure: DayTime,
    ) -> Result<Journey, ContainerError> {
        self.find_itineraries(start, end, departure, self.config.max_transfers)
            .into_iter()
            .next()
            .ok_or_else(|| ContainerError::NoItinerary {
                from: start.to_string(),
                to: end.to_string(),
            })
    }

    /// Finds the itinerary with the fewest transfers at the configured
    /// transfer bound.
    ///
    /// Ties keep discovery order, not duration order — this query is
    /// independent of [`Planner::find_fastest`]'s ranking.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::NoItinerary` when nothing connects the
    /// stops within the bound.
    pub fn find_minimal_transfers(
        &self,
        start: &str,
        end: &str,
        departure: DayTime,
    ) -> Result<Journey, ContainerError> {
        let journeys = self.search(start, end, departure, self.config.max_transfers);
        rank::min_transfers_first(&journeys)
            .cloned()
            .ok_or_else(|| ContainerError::NoItinerary {
                from: start.to_string(),
                to: end.to_string(),
            })
    }

    /// Returns every route connecting `from` to `to` in order, with no
    /// trip or time awareness.
    pub fn find_direct_routes(&self, from: &str, to: &str) -> Vec<&'a Route> {
        direct::find_direct_routes(self.source, from, to)
    }

    /// The BFS proper. Returns journeys in discovery order.
    fn search(
        &self,
        start: &str,
        end: &str,
        departure: DayTime,
        max_transfers: usize,
    ) -> Vec<Journey> {
        let mut journeys = Vec::new();
        let mut queue: VecDeque<SearchState> = VecDeque::new();
        let mut visited: HashSet<(String, usize)> = HashSet::new();
        let mut dequeued = 0usize;

        queue.push_back(SearchState {
            stop: start.to_string(),
            time: departure,
            legs: Vec::new(),
            transfer_stops: Vec::new(),
            transfers: 0,
        });

        while let Some(state) = queue.pop_front() {
            if dequeued >= self.config.max_iterations {
                debug!(
                    dequeued,
                    found = journeys.len(),
                    "search hit the iteration ceiling"
                );
                break;
            }
            dequeued += 1;

            // A node standing at the destination is a result, not a
            // continuation point.
            if state.stop == end {
                if let Ok(journey) = Journey::new(
                    state.legs,
                    state.transfer_stops,
                    departure,
                    state.time,
                ) {
                    journeys.push(journey);
                }
                continue;
            }

            // Boarding the first trip is not a transfer, so a node with
            // no legs yet may expand even at bound zero. Once riding,
            // every further boarding is a transfer.
            if !state.legs.is_empty() && state.transfers >= max_transfers {
                continue;
            }

            if !visited.insert((state.stop.clone(), state.transfers)) {
                continue;
            }

            trace!(
                stop = %state.stop,
                time = %state.time,
                transfers = state.transfers,
                "expanding search node"
            );

            for trip in self.source.trips_serving(&state.stop) {
                // Unprojected trips have no usable times here.
                let Some(here) = trip.arrival(&state.stop) else {
                    continue;
                };
                // The trip already left this stop before the traveller
                // got there.
                if here < state.time {
                    continue;
                }
                // No transferring onto the trip currently being ridden;
                // its downstream stops were fanned out when it was
                // boarded.
                if state.legs.last() == Some(&trip.id()) {
                    continue;
                }
                let Some(route) = self.source.route(trip.route()) else {
                    continue;
                };
                let Some(position) = route.position_of(&state.stop) else {
                    continue;
                };

                // One successor per downstream stop this trip serves:
                // the traveller may get off anywhere further along.
                for next_stop in &route.stops()[position + 1..] {
                    let Some(arrival) = trip.arrival(next_stop) else {
                        continue;
                    };

                    let mut legs = state.legs.clone();
                    let mut transfer_stops = state.transfer_stops.clone();
                    let mut transfers = state.transfers;
                    if let Some(&previous) = state.legs.last() {
                        if previous != trip.id() {
                            transfers += 1;
                            transfer_stops.push(state.stop.clone());
                        }
                    }
                    legs.push(trip.id());

                    queue.push_back(SearchState {
                        stop: next_stop.clone(),
                        time: arrival,
                        legs,
                        transfer_stops,
                        transfers,
                    });
                }
            }
        }

        debug!(
            start,
            end,
            dequeued,
            found = journeys.len(),
            "itinerary search complete"
        );
        journeys
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
