use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::LocationId;

/// A directed edge between two locations.
///
/// Links are not symmetric: `a -> b` says nothing about `b -> a`. Ordering is
/// by `(from, to)`, which keeps each location's outbound links contiguous in
/// an ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Link {
    /// The location this link leaves from.
    pub from: LocationId,
    /// The location this link leads to.
    pub to: LocationId,
}

impl Link {
    /// Creates a link from `from` to `to`.
    pub fn new(from: LocationId, to: LocationId) -> Self {
        Self { from, to }
    }

    /// Returns true if either endpoint is `location`.
    pub fn touches(&self, location: LocationId) -> bool {
        self.from == location || self.to == location
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
