//! Error types for the transit core.
//!
//! Two kinds cover every failure the core can raise: `InputError` for
//! malformed or out-of-domain caller-supplied values, and `ContainerError`
//! for entities or relationships that do not exist. Existence lookups on
//! the network return `Option` instead of raising; callers are expected
//! to check them.

use super::{RouteId, TripId};

/// A caller-supplied value is malformed or out of domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// Time text does not match zero-padded "HH:MM".
    #[error("invalid time: {reason}")]
    InvalidTime { reason: &'static str },

    /// Average speed for schedule projection must be positive.
    #[error("average speed must be positive, got {0}")]
    NonPositiveSpeed(f64),

    /// Weekday codes run 1 (Monday) through 7 (Sunday).
    #[error("weekday code must be 1-7, got {0}")]
    WeekdayOutOfRange(u8),

    /// A pipe-delimited record failed to parse.
    #[error("malformed {what} record: {reason}")]
    MalformedRecord {
        what: &'static str,
        reason: String,
    },

    /// An entity with the same key is already registered.
    #[error("duplicate {what} key: {key}")]
    DuplicateKey {
        what: &'static str,
        key: String,
    },
}

/// A requested entity or relationship does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// A route must list at least one stop.
    #[error("route must have at least one stop")]
    EmptyRoute,

    /// A journey must ride at least one trip.
    #[error("journey must have at least one leg")]
    EmptyJourney,

    /// A journey records exactly one transfer stop per change of trip.
    #[error("journey must have exactly one transfer stop per change of trip")]
    MismatchedTransfers,

    /// The trip has no arrival time recorded at the stop.
    #[error("trip {trip} has no arrival time at stop {stop}")]
    StopNotServed { trip: TripId, stop: String },

    /// No trip with this id is registered.
    #[error("unknown trip id {0}")]
    UnknownTrip(TripId),

    /// No route with this id is registered.
    #[error("unknown route id {0}")]
    UnknownRoute(RouteId),

    /// The search found no itinerary between the stops.
    #[error("no itinerary from {from} to {to}")]
    NoItinerary { from: String, to: String },
}

/// Umbrella error for operations that can fail either way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Container(#[from] ContainerError),
}
