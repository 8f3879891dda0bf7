//! Route types.
//!
//! A route is the static path a service follows: an ordered sequence of
//! stop names plus the weekdays it operates. Routes are immutable after
//! construction; trips reference them by id.

use std::fmt;

use super::{ContainerError, DaySet, DayOfWeek, Error, InputError};

/// Identifier of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub u32);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered path of stops plus the weekdays it operates.
///
/// The first element of the stop sequence is the start stop and the last
/// is the end stop; the sequence must be non-empty. Stop names are not
/// de-duplicated — a repeated name makes position lookups ambiguous, and
/// [`Route::position_of`] resolves to the first occurrence.
///
/// # Examples
///
/// ```
/// use transit_core::domain::{DaySet, Route, RouteId};
///
/// let route = Route::new(
///     RouteId(10),
///     "tram",
///     vec!["Depot".into(), "Harbour".into(), "Airport".into()],
///     DaySet::EVERY_DAY,
/// )
/// .unwrap();
///
/// assert_eq!(route.first_stop(), "Depot");
/// assert_eq!(route.last_stop(), "Airport");
/// assert_eq!(route.position_of("Harbour"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: RouteId,
    vehicle_type: String,
    stops: Vec<String>,
    days: DaySet,
}

impl Route {
    /// Constructs a route.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::EmptyRoute` if `stops` is empty.
    pub fn new(
        id: RouteId,
        vehicle_type: impl Into<String>,
        stops: Vec<String>,
        days: DaySet,
    ) -> Result<Self, ContainerError> {
        if stops.is_empty() {
            return Err(ContainerError::EmptyRoute);
        }
        Ok(Self {
            id,
            vehicle_type: vehicle_type.into(),
            stops,
            days,
        })
    }

    /// Returns the route id.
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Returns the vehicle-type label ("bus", "tram", ...).
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Returns the ordered stop names.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Returns the operating-day set.
    pub fn days(&self) -> DaySet {
        self.days
    }

    /// Returns the start stop (first in the sequence).
    pub fn first_stop(&self) -> &str {
        // Non-empty by construction.
        &self.stops[0]
    }

    /// Returns the end stop (last in the sequence).
    pub fn last_stop(&self) -> &str {
        &self.stops[self.stops.len() - 1]
    }

    /// Returns the position of the first occurrence of a stop name.
    pub fn position_of(&self, stop: &str) -> Option<usize> {
        self.stops.iter().position(|s| s == stop)
    }

    /// Returns true if the route's sequence contains the stop name.
    pub fn contains_stop(&self, stop: &str) -> bool {
        self.position_of(stop).is_some()
    }

    /// Returns true if the route operates on the given day.
    pub fn runs_on(&self, day: DayOfWeek) -> bool {
        self.days.contains(day)
    }

    /// Renders the persisted line form:
    /// `number|vehicleType|stop1;stop2;...|day1,day2,...`.
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.id,
            self.vehicle_type,
            self.stops.join(";"),
            self.days.to_list(),
        )
    }

    /// Parses the persisted line form.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MalformedRecord` on a wrong field count, a
    /// non-numeric id, an empty stop name, or a bad day list, and
    /// `ContainerError::EmptyRoute` when the stop field is empty.
    pub fn parse_line(line: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = line.split('|').collect();
        let [id, vehicle_type, stops, days] = fields.as_slice() else {
            return Err(InputError::MalformedRecord {
                what: "route",
                reason: format!("expected 4 fields, got {}", fields.len()),
            }
            .into());
        };

        let id: u32 = id.parse().map_err(|_| InputError::MalformedRecord {
            what: "route",
            reason: format!("invalid route id {id:?}"),
        })?;

        let stops: Vec<String> = if stops.is_empty() {
            Vec::new()
        } else {
            stops
                .split(';')
                .map(|name| {
                    if name.is_empty() {
                        Err(InputError::MalformedRecord {
                            what: "route",
                            reason: "empty stop name".to_string(),
                        })
                    } else {
                        Ok(name.to_string())
                    }
                })
                .collect::<Result<_, _>>()?
        };

        let days = DaySet::parse_list(days).map_err(|err| InputError::MalformedRecord {
            what: "route",
            reason: err.to_string(),
        })?;

        Ok(Route::new(RouteId(id), *vehicle_type, stops, days)?)
    }
}
