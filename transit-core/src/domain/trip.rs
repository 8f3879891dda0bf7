//! Trip types.
//!
//! A trip is one scheduled run of a route: which vehicle and driver work
//! it, when it starts, which weekday it operates, and the per-stop
//! arrival map the schedule projector fills in. Route, vehicle, and
//! driver are referenced by key; the network arena owns the entities.

use std::collections::BTreeMap;
use std::fmt;

use super::{ContainerError, DayOfWeek, DayTime, DriverId, Error, InputError, RouteId};

/// Identifier of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripId(pub u32);

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled run of a route.
///
/// The arrival map is keyed by stop name and populated one entry at a
/// time through [`Trip::set_arrival`] — by the schedule projector or by
/// line parsing. A stop with no entry is not served by this trip as far
/// as searches are concerned, whatever the route says.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: TripId,
    route: RouteId,
    vehicle: String,
    driver: DriverId,
    start: DayTime,
    day: DayOfWeek,
    arrivals: BTreeMap<String, DayTime>,
}

impl Trip {
    /// Constructs a trip with an empty schedule.
    ///
    /// # Errors
    ///
    /// Returns `InputError::WeekdayOutOfRange` unless `1 <= weekday <= 7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_core::domain::{DayTime, DriverId, RouteId, Trip, TripId};
    ///
    /// let start = DayTime::parse("08:00").unwrap();
    /// let trip = Trip::new(TripId(4), RouteId(10), "AB123CD", DriverId(7), start, 1).unwrap();
    /// assert_eq!(trip.day().code(), 1);
    /// assert!(!trip.has_stop("Depot"));
    ///
    /// assert!(Trip::new(TripId(5), RouteId(10), "AB123CD", DriverId(7), start, 8).is_err());
    /// ```
    pub fn new(
        id: TripId,
        route: RouteId,
        vehicle: impl Into<String>,
        driver: DriverId,
        start: DayTime,
        weekday: u8,
    ) -> Result<Self, InputError> {
        Ok(Self {
            id,
            route,
            vehicle: vehicle.into(),
            driver,
            start,
            day: DayOfWeek::new(weekday)?,
            arrivals: BTreeMap::new(),
        })
    }

    /// Returns the trip id.
    pub fn id(&self) -> TripId {
        self.id
    }

    /// Returns the id of the route this trip runs.
    pub fn route(&self) -> RouteId {
        self.route
    }

    /// Returns the registration plate of the assigned vehicle.
    pub fn vehicle_plate(&self) -> &str {
        &self.vehicle
    }

    /// Returns the id of the assigned driver.
    pub fn driver(&self) -> DriverId {
        self.driver
    }

    /// Returns the start time at the route's first stop.
    pub fn start_time(&self) -> DayTime {
        self.start
    }

    /// Returns the weekday this trip operates.
    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    /// Records the arrival time at a stop, replacing any previous entry.
    pub fn set_arrival(&mut self, stop: impl Into<String>, time: DayTime) {
        self.arrivals.insert(stop.into(), time);
    }

    /// Removes every arrival entry.
    pub fn clear_schedule(&mut self) {
        self.arrivals.clear();
    }

    /// Returns true if this trip has an arrival time recorded at the stop.
    pub fn has_stop(&self, stop: &str) -> bool {
        self.arrivals.contains_key(stop)
    }

    /// Returns the arrival time at a stop, if recorded.
    pub fn arrival(&self, stop: &str) -> Option<DayTime> {
        self.arrivals.get(stop).copied()
    }

    /// Returns the arrival time at a stop.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::StopNotServed` if no entry is recorded.
    pub fn require_arrival(&self, stop: &str) -> Result<DayTime, ContainerError> {
        self.arrival(stop).ok_or_else(|| ContainerError::StopNotServed {
            trip: self.id,
            stop: stop.to_string(),
        })
    }

    /// Iterates the recorded (stop, arrival) entries in stop-name order.
    pub fn schedule(&self) -> impl Iterator<Item = (&str, DayTime)> {
        self.arrivals.iter().map(|(stop, time)| (stop.as_str(), *time))
    }

    /// Returns the number of stops with a recorded arrival.
    pub fn stops_served(&self) -> usize {
        self.arrivals.len()
    }

    /// Renders the persisted line form:
    /// `id|route|plate|driver|HH:MM|day|stop=HH:MM;stop=HH:MM;...`.
    ///
    /// Schedule entries are emitted in stop-name order, so the output is
    /// deterministic; parsing accepts entries in any order.
    pub fn to_line(&self) -> String {
        let schedule: Vec<String> = self
            .schedule()
            .map(|(stop, time)| format!("{stop}={time}"))
            .collect();
        format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.id,
            self.route,
            self.vehicle,
            self.driver,
            self.start,
            self.day,
            schedule.join(";"),
        )
    }

    /// Parses the persisted line form.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MalformedRecord` on a wrong field count or a
    /// bad id/plate/driver/day field, and `InputError::InvalidTime` on a
    /// bad time anywhere in the line.
    pub fn parse_line(line: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = line.split('|').collect();
        let [id, route, vehicle, driver, start, day, schedule] = fields.as_slice() else {
            return Err(InputError::MalformedRecord {
                what: "trip",
                reason: format!("expected 7 fields, got {}", fields.len()),
            }
            .into());
        };

        let id: u32 = id.parse().map_err(|_| InputError::MalformedRecord {
            what: "trip",
            reason: format!("invalid trip id {id:?}"),
        })?;
        let route: u32 = route.parse().map_err(|_| InputError::MalformedRecord {
            what: "trip",
            reason: format!("invalid route id {route:?}"),
        })?;
        let driver: u32 = driver.parse().map_err(|_| InputError::MalformedRecord {
            what: "trip",
            reason: format!("invalid driver id {driver:?}"),
        })?;
        let start = DayTime::parse(start)?;
        let day: u8 = day.parse().map_err(|_| InputError::MalformedRecord {
            what: "trip",
            reason: format!("invalid day code {day:?}"),
        })?;

        let mut trip = Trip::new(
            TripId(id),
            RouteId(route),
            *vehicle,
            DriverId(driver),
            start,
            day,
        )?;

        if !schedule.is_empty() {
            for entry in schedule.split(';') {
                let Some((stop, time)) = entry.split_once('=') else {
                    return Err(InputError::MalformedRecord {
                        what: "trip",
                        reason: format!("schedule entry {entry:?} is not stop=HH:MM"),
                    }
                    .into());
                };
                if stop.is_empty() {
                    return Err(InputError::MalformedRecord {
                        what: "trip",
                        reason: "empty stop name in schedule".to_string(),
                    }
                    .into());
                }
                trip.set_arrival(stop, DayTime::parse(time)?);
            }
        }

        Ok(trip)
    }
}
