//! The owning arena for network entities.
//!
//! `TransitNetwork` holds stops, routes, trips, vehicles, and drivers in
//! flat vectors and indexes them by their natural keys. Everything else
//! in the crate works with ids and borrows; only the arena mutates, and
//! only through its own methods. Lookups return `Option` — an absent
//! entity is an answer, not an error.

use std::collections::HashMap;

use crate::domain::{
    Driver, DriverId, Error, InputError, Route, RouteId, Stop, StopId, Trip, TripId, Vehicle,
};
use crate::planner::TransitSource;
use crate::schedule;

/// A read-mostly snapshot of the scheduled network.
///
/// The surrounding system registers entities at setup time; the planner
/// consumes the result read-only. The one mutation path after setup is
/// [`TransitNetwork::project_schedule`], which rewrites a single trip's
/// arrival map. Callers running searches concurrently with projection on
/// the same network must serialize the two themselves.
#[derive(Debug, Default)]
pub struct TransitNetwork {
    stops: Vec<Stop>,
    routes: Vec<Route>,
    trips: Vec<Trip>,
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,

    stops_by_id: HashMap<StopId, usize>,
    stops_by_name: HashMap<String, usize>,
    routes_by_id: HashMap<RouteId, usize>,
    trips_by_id: HashMap<TripId, usize>,
    vehicles_by_plate: HashMap<String, usize>,
    drivers_by_id: HashMap<DriverId, usize>,
}

impl TransitNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stop.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DuplicateKey` if the id or the name is
    /// already registered — stop names key the trip-serving queries, so
    /// they must be unique too.
    pub fn add_stop(&mut self, stop: Stop) -> Result<(), InputError> {
        if self.stops_by_id.contains_key(&stop.id()) {
            return Err(InputError::DuplicateKey {
                what: "stop id",
                key: stop.id().to_string(),
            });
        }
        if self.stops_by_name.contains_key(stop.name()) {
            return Err(InputError::DuplicateKey {
                what: "stop name",
                key: stop.name().to_string(),
            });
        }
        let index = self.stops.len();
        self.stops_by_id.insert(stop.id(), index);
        self.stops_by_name.insert(stop.name().to_string(), index);
        self.stops.push(stop);
        Ok(())
    }

    /// Registers a route.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DuplicateKey` on a repeated route id.
    pub fn add_route(&mut self, route: Route) -> Result<(), InputError> {
        if self.routes_by_id.contains_key(&route.id()) {
            return Err(InputError::DuplicateKey {
                what: "route id",
                key: route.id().to_string(),
            });
        }
        self.routes_by_id.insert(route.id(), self.routes.len());
        self.routes.push(route);
        Ok(())
    }

    /// Registers a trip.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DuplicateKey` on a repeated trip id.
    pub fn add_trip(&mut self, trip: Trip) -> Result<(), InputError> {
        if self.trips_by_id.contains_key(&trip.id()) {
            return Err(InputError::DuplicateKey {
                what: "trip id",
                key: trip.id().to_string(),
            });
        }
        self.trips_by_id.insert(trip.id(), self.trips.len());
        self.trips.push(trip);
        Ok(())
    }

    /// Registers a vehicle.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DuplicateKey` on a repeated plate.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), InputError> {
        if self.vehicles_by_plate.contains_key(vehicle.plate()) {
            return Err(InputError::DuplicateKey {
                what: "vehicle plate",
                key: vehicle.plate().to_string(),
            });
        }
        self.vehicles_by_plate
            .insert(vehicle.plate().to_string(), self.vehicles.len());
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Registers a driver.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DuplicateKey` on a repeated driver id.
    pub fn add_driver(&mut self, driver: Driver) -> Result<(), InputError> {
        if self.drivers_by_id.contains_key(&driver.id()) {
            return Err(InputError::DuplicateKey {
                what: "driver id",
                key: driver.id().to_string(),
            });
        }
        self.drivers_by_id.insert(driver.id(), self.drivers.len());
        self.drivers.push(driver);
        Ok(())
    }

    /// Looks up a stop by id.
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops_by_id.get(&id).map(|&i| &self.stops[i])
    }

    /// Looks up a stop by name.
    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stops_by_name.get(name).map(|&i| &self.stops[i])
    }

    /// Looks up a route by id.
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes_by_id.get(&id).map(|&i| &self.routes[i])
    }

    /// Looks up a trip by id.
    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trips_by_id.get(&id).map(|&i| &self.trips[i])
    }

    /// Looks up a vehicle by registration plate.
    pub fn vehicle_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles_by_plate.get(plate).map(|&i| &self.vehicles[i])
    }

    /// Looks up a driver by id.
    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers_by_id.get(&id).map(|&i| &self.drivers[i])
    }

    /// Returns all stops in registration order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns all routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns all trips in registration order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Returns all vehicles in registration order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Returns all drivers in registration order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Returns every trip with an arrival time recorded at the stop.
    pub fn trips_serving(&self, stop: &str) -> Vec<&Trip> {
        self.trips.iter().filter(|t| t.has_stop(stop)).collect()
    }

    /// Recomputes a trip's per-stop arrival times from its route, its
    /// start time, and an average speed.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::UnknownTrip` / `UnknownRoute` if the ids
    /// do not resolve, and the projector's own errors otherwise (see
    /// [`schedule::compute_arrival_times`]).
    pub fn project_schedule(
        &mut self,
        trip: TripId,
        average_speed_kmh: f64,
    ) -> Result<(), Error> {
        use crate::domain::ContainerError;

        let trip_index = *self
            .trips_by_id
            .get(&trip)
            .ok_or(ContainerError::UnknownTrip(trip))?;
        let route_id = self.trips[trip_index].route();
        let route_index = *self
            .routes_by_id
            .get(&route_id)
            .ok_or(ContainerError::UnknownRoute(route_id))?;

        let route = &self.routes[route_index];
        let trip = &mut self.trips[trip_index];
        schedule::compute_arrival_times(trip, route, average_speed_kmh)
    }
}

impl TransitSource for TransitNetwork {
    fn trips_serving(&self, stop: &str) -> Vec<&Trip> {
        TransitNetwork::trips_serving(self, stop)
    }

    fn route(&self, id: RouteId) -> Option<&Route> {
        TransitNetwork::route(self, id)
    }

    fn routes(&self) -> &[Route] {
        TransitNetwork::routes(self)
    }
}
