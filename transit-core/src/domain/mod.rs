//! Domain types for the transit planner.
//!
//! Value types representing the scheduled network. Validation happens at
//! construction time, so code that receives these types can trust their
//! invariants: a `DayTime` is always in range, a `Route` always has a
//! stop, a `Journey` always has a leg.

mod days;
mod driver;
mod error;
mod journey;
mod route;
mod stop;
mod time;
mod trip;
mod vehicle;

pub use days::{DayOfWeek, DaySet};
pub use driver::{Driver, DriverId};
pub use error::{ContainerError, Error, InputError};
pub use journey::Journey;
pub use route::{Route, RouteId};
pub use stop::{Stop, StopId};
pub use time::DayTime;
pub use trip::{Trip, TripId};
pub use vehicle::{Vehicle, VehicleKind};
