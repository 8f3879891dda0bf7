//! Stop types.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub u32);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named location that vehicles serve.
///
/// Identity is the id alone: two stops are equal iff their ids match,
/// whatever their names say. Stops are created at network-setup time and
/// never mutated.
#[derive(Debug, Clone)]
pub struct Stop {
    id: StopId,
    name: String,
}

impl Stop {
    /// Creates a stop.
    pub fn new(id: StopId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the stop id.
    pub fn id(&self) -> StopId {
        self.id
    }

    /// Returns the stop name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
