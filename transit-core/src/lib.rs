//! Itinerary planning core for a scheduled public-transit network.
//!
//! Given a read-only snapshot of stops, routes, and trips, this crate
//! answers "how do I get from A to B departing at T" with ranked,
//! transfer-bounded itineraries, and derives per-stop arrival schedules
//! for trips from a route and an average speed. Persistence, rendering,
//! and user management are the surrounding system's problem.

pub mod domain;
pub mod network;
pub mod planner;
pub mod schedule;
