//! Vehicle types.
//!
//! The fleet is a closed set of three vehicle kinds. Kind-specific data
//! (fuel for buses, supply voltage for the electric kinds) lives on the
//! variant; capacity is shared. Vehicles matter for display and crew
//! assignment only — the planner never looks at them.

use std::fmt;

/// Kind-specific vehicle data.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleKind {
    /// Diesel bus with a fuel tank level in litres.
    Bus { fuel_litres: f64 },
    /// Tram running at a supply voltage.
    Tram { voltage: u32 },
    /// Trolleybus running at a supply voltage.
    Trolleybus { voltage: u32 },
}

impl VehicleKind {
    /// Returns the vehicle-type label used on routes.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Bus { .. } => "bus",
            VehicleKind::Tram { .. } => "tram",
            VehicleKind::Trolleybus { .. } => "trolleybus",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A vehicle in the fleet, keyed by its registration plate.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    plate: String,
    capacity: u32,
    kind: VehicleKind,
}

impl Vehicle {
    /// Creates a vehicle.
    pub fn new(plate: impl Into<String>, capacity: u32, kind: VehicleKind) -> Self {
        Self {
            plate: plate.into(),
            capacity,
            kind,
        }
    }

    /// Returns the registration plate.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Returns the passenger capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the kind-specific data.
    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    /// Returns the vehicle-type label used on routes.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}
