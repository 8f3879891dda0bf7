//! Schedule projection.
//!
//! Derives a trip's per-stop arrival times from its route, its start
//! time, and an average speed. The network uses a fixed inter-stop
//! distance rather than measured segment lengths, so every hop costs the
//! same travel time, plus a fixed dwell at each intermediate stop.

use tracing::debug;

use crate::domain::{ContainerError, Error, InputError, Route, Trip};

/// Distance assumed between consecutive stops, in kilometres.
pub const INTER_STOP_DISTANCE_KM: f64 = 1.5;

/// Dwell added at each stop before the next hop, in minutes.
pub const STOP_DWELL_MINUTES: i64 = 1;

/// Recomputes `trip`'s arrival map from `route` and an average speed.
///
/// The route's first stop gets the trip's start time exactly. Each later
/// stop arrives one dwell plus one hop after the previous stop, where the
/// hop is `round(INTER_STOP_DISTANCE_KM / speed * 60)` minutes,
/// round-half-up. Any previous schedule on the trip is discarded first,
/// so re-running with the same inputs is idempotent.
///
/// `route` must be the route the trip runs; the caller resolves the
/// pairing (see `TransitNetwork::project_schedule`).
///
/// # Errors
///
/// Returns `InputError::NonPositiveSpeed` unless the speed is finite and
/// positive, and `ContainerError::EmptyRoute` if the route has no stops.
pub fn compute_arrival_times(
    trip: &mut Trip,
    route: &Route,
    average_speed_kmh: f64,
) -> Result<(), Error> {
    if !(average_speed_kmh.is_finite() && average_speed_kmh > 0.0) {
        return Err(InputError::NonPositiveSpeed(average_speed_kmh).into());
    }
    let Some((first, rest)) = route.stops().split_first() else {
        return Err(ContainerError::EmptyRoute.into());
    };

    let hop_minutes = (INTER_STOP_DISTANCE_KM / average_speed_kmh * 60.0).round() as i64;

    trip.clear_schedule();
    let mut clock = trip.start_time();
    trip.set_arrival(first.clone(), clock);
    for stop in rest {
        clock = clock.plus_minutes(hop_minutes + STOP_DWELL_MINUTES);
        trip.set_arrival(stop.clone(), clock);
    }

    debug!(
        trip = %trip.id(),
        stops = route.stops().len(),
        hop_minutes,
        "projected trip schedule"
    );
    Ok(())
}
