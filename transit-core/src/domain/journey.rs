//! Journey types.
//!
//! A `Journey` is the caller-facing result of a search: the trips ridden
//! in order, the stops where the traveller changed trips, and the start
//! and end of the whole itinerary.

use chrono::Duration;

use super::{ContainerError, DayTime, TripId};

/// A complete itinerary from origin to destination.
///
/// Immutable once built. Legs are trip ids into the network arena; the
/// transfer-stop list names the boarding point of every leg after the
/// first, so its length is always the leg count minus one.
///
/// # Examples
///
/// ```
/// use transit_core::domain::{DayTime, Journey, TripId};
///
/// let journey = Journey::new(
///     vec![TripId(1), TripId(2)],
///     vec!["Harbour".into()],
///     DayTime::parse("08:00").unwrap(),
///     DayTime::parse("08:14").unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(journey.leg_count(), 2);
/// assert_eq!(journey.transfer_count(), 1);
/// assert_eq!(journey.total_duration(), chrono::Duration::minutes(14));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    legs: Vec<TripId>,
    transfer_stops: Vec<String>,
    start: DayTime,
    end: DayTime,
}

impl Journey {
    /// Constructs a journey.
    ///
    /// The search engine is responsible for handing in consistent legs
    /// and times; only the structural invariants are checked here.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::EmptyJourney` if `legs` is empty, and
    /// `ContainerError::MismatchedTransfers` unless
    /// `transfer_stops.len() == legs.len() - 1`.
    pub fn new(
        legs: Vec<TripId>,
        transfer_stops: Vec<String>,
        start: DayTime,
        end: DayTime,
    ) -> Result<Self, ContainerError> {
        if legs.is_empty() {
            return Err(ContainerError::EmptyJourney);
        }
        if transfer_stops.len() != legs.len() - 1 {
            return Err(ContainerError::MismatchedTransfers);
        }
        Ok(Self {
            legs,
            transfer_stops,
            start,
            end,
        })
    }

    /// Returns the trips ridden, in order.
    pub fn legs(&self) -> &[TripId] {
        &self.legs
    }

    /// Returns the stops where the traveller changes trips, in order.
    pub fn transfer_stops(&self) -> &[String] {
        &self.transfer_stops
    }

    /// Returns the itinerary start time (the requested departure).
    pub fn start_time(&self) -> DayTime {
        self.start
    }

    /// Returns the arrival time at the destination.
    pub fn end_time(&self) -> DayTime {
        self.end
    }

    /// Returns the number of trip legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the number of transfers.
    pub fn transfer_count(&self) -> usize {
        self.transfer_stops.len()
    }

    /// Returns true if the journey rides a single trip.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    /// Returns the total duration, end minus start.
    ///
    /// Times are day-local, so the subtraction wraps forward at
    /// midnight: an itinerary that crosses midnight reports the wrapped
    /// duration rather than a day-aware one.
    pub fn total_duration(&self) -> Duration {
        self.end.duration_since(self.start)
    }
}
