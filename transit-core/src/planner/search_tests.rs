//! Scenario tests for the itinerary search.

use super::*;
use crate::domain::{DaySet, DayOfWeek, Driver, DriverId, Stop, StopId, Vehicle, VehicleKind};
use crate::network::TransitNetwork;

fn t(s: &str) -> DayTime {
    DayTime::parse(s).unwrap()
}

fn route(id: u32, stops: &[&str]) -> Route {
    Route::new(
        RouteId(id),
        "bus",
        stops.iter().map(|s| s.to_string()).collect(),
        DaySet::EVERY_DAY,
    )
    .unwrap()
}

/// Builds a network from route shapes and (trip, route, start, speed)
/// rows, registering stops as they appear and projecting every trip.
fn network(routes: &[(u32, &[&str])], trips: &[(u32, u32, &str, f64)]) -> TransitNetwork {
    let mut network = TransitNetwork::new();
    network
        .add_vehicle(Vehicle::new(
            "AB123CD",
            90,
            VehicleKind::Bus { fuel_litres: 120.0 },
        ))
        .unwrap();
    network.add_driver(Driver::new(DriverId(1), "R. Crane")).unwrap();

    let mut next_stop_id = 1u32;
    for &(id, stops) in routes {
        for &name in stops {
            if network.stop_by_name(name).is_none() {
                network.add_stop(Stop::new(StopId(next_stop_id), name)).unwrap();
                next_stop_id += 1;
            }
        }
        network.add_route(route(id, stops)).unwrap();
    }

    for &(trip_id, route_id, start, speed) in trips {
        network
            .add_trip(
                Trip::new(
                    TripId(trip_id),
                    RouteId(route_id),
                    "AB123CD",
                    DriverId(1),
                    t(start),
                    DayOfWeek::MONDAY.code(),
                )
                .unwrap(),
            )
            .unwrap();
        network.project_schedule(TripId(trip_id), speed).unwrap();
    }

    network
}

#[test]
fn direct_single_trip_connection() {
    // One trip at 30 km/h: Depot 08:00, Harbour 08:04, Airport 08:08.
    let network = network(
        &[(1, &["Depot", "Harbour", "Airport"])],
        &[(1, 1, "08:00", 30.0)],
    );
    let planner = Planner::new(&network);

    let journeys = planner.find_itineraries("Depot", "Airport", t("08:00"), 0);

    assert_eq!(journeys.len(), 1);
    let journey = &journeys[0];
    assert_eq!(journey.legs(), [TripId(1)]);
    assert_eq!(journey.transfer_count(), 0);
    assert_eq!(journey.start_time(), t("08:00"));
    assert_eq!(journey.end_time(), t("08:08"));
}

#[test]
fn fastest_on_the_reference_network() {
    let network = network(
        &[(1, &["Depot", "Harbour", "Airport"])],
        &[(1, 1, "08:00", 30.0)],
    );
    let planner = Planner::new(&network);

    let journey = planner.find_fastest("Depot", "Airport", t("08:00")).unwrap();

    assert!(journey.is_direct());
    assert_eq!(journey.total_duration(), chrono::Duration::minutes(8));
}

#[test]
fn intermediate_boarding_respects_the_clock() {
    let network = network(
        &[(1, &["Depot", "Harbour", "Airport"])],
        &[(1, 1, "08:00", 30.0)],
    );
    let planner = Planner::new(&network);

    // Standing at Harbour before the trip passes: catchable.
    let journeys = planner.find_itineraries("Harbour", "Airport", t("08:04"), 0);
    assert_eq!(journeys.len(), 1);
    assert_eq!(journeys[0].end_time(), t("08:08"));

    // Standing at Harbour after the trip passed: not catchable.
    let journeys = planner.find_itineraries("Harbour", "Airport", t("08:05"), 0);
    assert!(journeys.is_empty());
}

#[test]
fn forced_transfer_scenario() {
    // Two routes meeting at Harbour; the connection requires one change.
    let network = network(
        &[(1, &["Depot", "Harbour"]), (2, &["Harbour", "Airport"])],
        &[(1, 1, "08:00", 30.0), (2, 2, "08:10", 30.0)],
    );
    let planner = Planner::new(&network);

    let journeys = planner.find_itineraries("Depot", "Airport", t("08:00"), 1);

    assert_eq!(journeys.len(), 1);
    let journey = &journeys[0];
    assert_eq!(journey.legs(), [TripId(1), TripId(2)]);
    assert_eq!(journey.transfer_stops(), ["Harbour"]);
    assert_eq!(journey.transfer_count(), 1);
    assert_eq!(journey.total_duration(), chrono::Duration::minutes(14));

    // The same query with no transfers allowed finds nothing.
    assert!(planner
        .find_itineraries("Depot", "Airport", t("08:00"), 0)
        .is_empty());
}

#[test]
fn transfer_at_equal_time_is_catchable() {
    // The connecting trip leaves Harbour at the exact minute the first
    // trip arrives there.
    let network = network(
        &[(1, &["Depot", "Harbour"]), (2, &["Harbour", "Airport"])],
        &[(1, 1, "08:00", 30.0), (2, 2, "08:04", 30.0)],
    );
    let planner = Planner::new(&network);

    let journeys = planner.find_itineraries("Depot", "Airport", t("08:00"), 1);
    assert_eq!(journeys.len(), 1);
    assert_eq!(journeys[0].end_time(), t("08:08"));
}

#[test]
fn transfer_bound_is_respected() {
    // A chain needing two changes: Depot -> A -> B -> End.
    let network = network(
        &[
            (1, &["Depot", "StopA"]),
            (2, &["StopA", "StopB"]),
            (3, &["StopB", "End"]),
        ],
        &[
            (1, 1, "08:00", 30.0),
            (2, 2, "08:10", 30.0),
            (3, 3, "08:20", 30.0),
        ],
    );
    let planner = Planner::new(&network);

    assert!(planner.find_itineraries("Depot", "End", t("08:00"), 1).is_empty());

    let journeys = planner.find_itineraries("Depot", "End", t("08:00"), 2);
    assert_eq!(journeys.len(), 1);
    assert_eq!(journeys[0].transfer_count(), 2);

    for bound in 0..4 {
        for journey in planner.find_itineraries("Depot", "End", t("08:00"), bound) {
            assert!(journey.transfer_count() <= bound);
            assert_eq!(journey.transfer_count(), journey.leg_count() - 1);
        }
    }
}

#[test]
fn results_sorted_by_duration() {
    // Two independent direct routes, the slower one registered first.
    let network = network(
        &[(1, &["Depot", "Airport"]), (2, &["Depot", "Airport"])],
        &[(1, 1, "08:00", 10.0), (2, 2, "08:00", 30.0)],
    );
    let planner = Planner::new(&network);

    let journeys = planner.find_itineraries("Depot", "Airport", t("08:00"), 0);

    assert_eq!(journeys.len(), 2);
    assert!(journeys[0].total_duration() <= journeys[1].total_duration());
    assert_eq!(journeys[0].legs(), [TripId(2)]);
}

#[test]
fn earlier_departure_is_skipped_for_a_later_trip() {
    // Two runs of the same route; the traveller shows up between them.
    let network = network(
        &[(1, &["Depot", "Harbour", "Airport"])],
        &[(1, 1, "08:00", 30.0), (2, 1, "08:30", 30.0)],
    );
    let planner = Planner::new(&network);

    let journeys = planner.find_itineraries("Depot", "Airport", t("08:05"), 0);

    assert_eq!(journeys.len(), 1);
    let journey = &journeys[0];
    assert_eq!(journey.legs(), [TripId(2)]);
    assert_eq!(journey.start_time(), t("08:05"));
    assert_eq!(journey.end_time(), t("08:38"));
}

#[test]
fn fastest_and_minimal_transfers_can_disagree() {
    // A slow direct route against a fast two-leg connection.
    let network = network(
        &[
            (1, &["Depot", "StopA", "StopB", "Airport"]), // slow, direct
            (2, &["Depot", "Harbour"]),
            (3, &["Harbour", "Airport"]),
        ],
        &[
            (1, 1, "08:00", 10.0), // hops of 9+1 min: Airport at 08:30
            (2, 2, "08:00", 30.0), // Harbour at 08:04
            (3, 3, "08:06", 30.0), // Airport at 08:10
        ],
    );
    let planner = Planner::new(&network);

    let fastest = planner.find_fastest("Depot", "Airport", t("08:00")).unwrap();
    assert_eq!(fastest.transfer_count(), 1);
    assert_eq!(fastest.total_duration(), chrono::Duration::minutes(10));

    let fewest = planner
        .find_minimal_transfers("Depot", "Airport", t("08:00"))
        .unwrap();
    assert!(fewest.is_direct());
    assert_eq!(fewest.total_duration(), chrono::Duration::minutes(30));
}

#[test]
fn no_itinerary_raises_on_single_result_queries() {
    let network = network(
        &[(1, &["Depot", "Harbour"]), (2, &["Museum", "Airport"])],
        &[(1, 1, "08:00", 30.0), (2, 2, "08:00", 30.0)],
    );
    let planner = Planner::new(&network);

    assert!(planner
        .find_itineraries("Depot", "Airport", t("08:00"), 2)
        .is_empty());
    assert!(matches!(
        planner.find_fastest("Depot", "Airport", t("08:00")),
        Err(ContainerError::NoItinerary { .. })
    ));
    assert!(matches!(
        planner.find_minimal_transfers("Depot", "Airport", t("08:00")),
        Err(ContainerError::NoItinerary { .. })
    ));
}

#[test]
fn unprojected_trip_is_invisible() {
    let mut network = network(&[(1, &["Depot", "Harbour", "Airport"])], &[]);
    network
        .add_trip(
            Trip::new(
                TripId(1),
                RouteId(1),
                "AB123CD",
                DriverId(1),
                t("08:00"),
                1,
            )
            .unwrap(),
        )
        .unwrap();
    let planner = Planner::new(&network);

    // No schedule was projected, so the trip serves nothing.
    assert!(planner
        .find_itineraries("Depot", "Airport", t("08:00"), 2)
        .is_empty());
}

#[test]
fn same_stop_query_finds_nothing() {
    let network = network(
        &[(1, &["Depot", "Harbour", "Airport"])],
        &[(1, 1, "08:00", 30.0)],
    );
    let planner = Planner::new(&network);

    assert!(planner
        .find_itineraries("Depot", "Depot", t("08:00"), 2)
        .is_empty());
}

#[test]
fn iteration_ceiling_stops_the_search() {
    let network = network(
        &[(1, &["Depot", "Harbour", "Airport"])],
        &[(1, 1, "08:00", 30.0)],
    );
    let planner = Planner::with_config(&network, SearchConfig::new(2, 0));

    // With a zero ceiling nothing is ever dequeued.
    assert!(planner
        .find_itineraries("Depot", "Airport", t("08:00"), 2)
        .is_empty());
}

#[test]
fn cyclic_network_terminates() {
    // Two routes forming a loop with frequent trips: the visited set and
    // the ceiling keep this from exploding.
    let network = network(
        &[(1, &["Depot", "Harbour"]), (2, &["Harbour", "Depot"])],
        &[
            (1, 1, "08:00", 30.0),
            (2, 2, "08:10", 30.0),
            (3, 1, "08:20", 30.0),
            (4, 2, "08:30", 30.0),
        ],
    );
    let planner = Planner::new(&network);

    // There is no Airport: the search must drain without finding one.
    assert!(planner
        .find_itineraries("Depot", "Airport", t("08:00"), 2)
        .is_empty());
}

#[test]
fn direct_routes_via_planner() {
    let network = network(
        &[(1, &["Depot", "Harbour", "Airport"]), (2, &["Airport", "Depot"])],
        &[],
    );
    let planner = Planner::new(&network);

    let ids: Vec<RouteId> = planner
        .find_direct_routes("Depot", "Airport")
        .iter()
        .map(|r| r.id())
        .collect();
    assert_eq!(ids, vec![RouteId(1)]);

    let ids: Vec<RouteId> = planner
        .find_direct_routes("Airport", "Depot")
        .iter()
        .map(|r| r.id())
        .collect();
    assert_eq!(ids, vec![RouteId(2)]);
}

/// A source whose trips reference a route the snapshot does not expose;
/// the search must skip them rather than panic.
struct DanglingSource {
    trips: Vec<Trip>,
}

impl TransitSource for DanglingSource {
    fn trips_serving(&self, stop: &str) -> Vec<&Trip> {
        self.trips.iter().filter(|t| t.has_stop(stop)).collect()
    }

    fn route(&self, _id: RouteId) -> Option<&Route> {
        None
    }

    fn routes(&self) -> &[Route] {
        &[]
    }
}

#[test]
fn trip_with_unresolvable_route_is_skipped() {
    let mut trip = Trip::new(
        TripId(1),
        RouteId(9),
        "AB123CD",
        DriverId(1),
        t("08:00"),
        1,
    )
    .unwrap();
    trip.set_arrival("Depot", t("08:00"));
    trip.set_arrival("Airport", t("08:10"));

    let source = DanglingSource { trips: vec![trip] };
    let planner = Planner::new(&source);

    assert!(planner
        .find_itineraries("Depot", "Airport", t("08:00"), 2)
        .is_empty());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const STOPS: [&str; 6] = ["S0", "S1", "S2", "S3", "S4", "S5"];
    const SPEEDS: [f64; 3] = [10.0, 30.0, 60.0];

    /// Builds a projected network from route shapes and
    /// (route pick, start minute, speed pick) trip rows.
    fn build(shapes: Vec<Vec<&'static str>>, trips: Vec<(usize, i64, usize)>) -> TransitNetwork {
        let mut network = TransitNetwork::new();
        network
            .add_vehicle(Vehicle::new(
                "AB123CD",
                90,
                VehicleKind::Bus { fuel_litres: 120.0 },
            ))
            .unwrap();
        network.add_driver(Driver::new(DriverId(1), "R. Crane")).unwrap();

        let mut next_stop_id = 1u32;
        for (i, shape) in shapes.iter().enumerate() {
            for &name in shape {
                if network.stop_by_name(name).is_none() {
                    network
                        .add_stop(Stop::new(StopId(next_stop_id), name))
                        .unwrap();
                    next_stop_id += 1;
                }
            }
            network.add_route(route((i + 1) as u32, shape)).unwrap();
        }

        for (j, (route_pick, start, speed_pick)) in trips.into_iter().enumerate() {
            let id = TripId((j + 1) as u32);
            let route_id = RouteId((route_pick % shapes.len() + 1) as u32);
            network
                .add_trip(
                    Trip::new(
                        id,
                        route_id,
                        "AB123CD",
                        DriverId(1),
                        DayTime::from_minutes(start),
                        1,
                    )
                    .unwrap(),
                )
                .unwrap();
            network.project_schedule(id, SPEEDS[speed_pick]).unwrap();
        }

        network
    }

    prop_compose! {
        fn network_strategy()(
            shapes in prop::collection::vec(
                proptest::sample::subsequence(STOPS.to_vec(), 2..=4),
                1..4,
            ),
            trips in prop::collection::vec((0usize..8, 0i64..1200, 0usize..3), 1..6),
        ) -> TransitNetwork {
            build(shapes, trips)
        }
    }

    proptest! {
        /// Every returned journey respects the structural invariants,
        /// the transfer bound, and the duration ordering.
        #[test]
        fn search_invariants(
            network in network_strategy(),
            from in 0usize..6,
            to in 0usize..6,
            departure in 0i64..1440,
            bound in 0usize..3,
        ) {
            let departure = DayTime::from_minutes(departure);
            let planner = Planner::new(&network);

            let journeys = planner.find_itineraries(STOPS[from], STOPS[to], departure, bound);

            let mut previous = None;
            for journey in &journeys {
                prop_assert!(journey.transfer_count() <= bound);
                prop_assert_eq!(journey.transfer_count(), journey.leg_count() - 1);
                prop_assert_eq!(journey.start_time(), departure);
                if let Some(previous) = previous {
                    prop_assert!(previous <= journey.total_duration());
                }
                previous = Some(journey.total_duration());
            }
        }

        /// The single-result queries fail exactly when the underlying
        /// search at the configured bound comes back empty.
        #[test]
        fn single_result_queries_agree_with_emptiness(
            network in network_strategy(),
            from in 0usize..6,
            to in 0usize..6,
            departure in 0i64..1440,
        ) {
            let departure = DayTime::from_minutes(departure);
            let planner = Planner::new(&network);

            let any = !planner
                .find_itineraries(STOPS[from], STOPS[to], departure, 2)
                .is_empty();
            prop_assert_eq!(planner.find_fastest(STOPS[from], STOPS[to], departure).is_ok(), any);
            prop_assert_eq!(
                planner.find_minimal_transfers(STOPS[from], STOPS[to], departure).is_ok(),
                any
            );
        }
    }
}
