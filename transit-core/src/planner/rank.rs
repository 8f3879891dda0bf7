//! Result ordering and selection.
//!
//! The search emits journeys in discovery order; these helpers impose the
//! caller-facing orderings. The two selection rules are deliberately
//! independent: "fastest" is first by duration, "minimal transfers" is
//! the first discovered journey with the fewest changes, ties kept in
//! discovery order rather than re-ranked by duration.

use crate::domain::Journey;

/// Sorts journeys by ascending total duration. Stable, so journeys of
/// equal duration keep their discovery order.
pub fn sort_by_duration(mut journeys: Vec<Journey>) -> Vec<Journey> {
    journeys.sort_by_key(|j| j.total_duration());
    journeys
}

/// Returns the first journey with the strictly minimal transfer count.
///
/// A later journey replaces the current pick only when its transfer
/// count is strictly smaller, so ties resolve to the earliest entry.
pub fn min_transfers_first(journeys: &[Journey]) -> Option<&Journey> {
    let mut best: Option<&Journey> = None;
    for journey in journeys {
        match best {
            Some(b) if journey.transfer_count() >= b.transfer_count() => {}
            _ => best = Some(journey),
        }
    }
    best
}
