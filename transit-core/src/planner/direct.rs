//! Direct-route lookup.
//!
//! A purely static topology query: which routes connect two stops in
//! order, ignoring trips and times entirely.

use crate::domain::Route;

use super::search::TransitSource;

/// Returns every route whose sequence contains both stops with `from`
/// strictly before `to`.
///
/// Positions are first occurrences, matching the search engine's
/// handling of repeated stop names. Unknown stop names simply match no
/// route. Cost is one stop-scan per route.
pub fn find_direct_routes<'a, S: TransitSource>(
    source: &'a S,
    from: &str,
    to: &str,
) -> Vec<&'a Route> {
    source
        .routes()
        .iter()
        .filter(|route| {
            match (route.position_of(from), route.position_of(to)) {
                (Some(a), Some(b)) => a < b,
                _ => false,
            }
        })
        .collect()
}
