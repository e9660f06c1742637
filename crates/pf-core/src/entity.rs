use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a location. Assigned by the world on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl LocationId {
    /// The permanent start location every world is seeded with.
    pub const START: Self = Self(0);

    /// Returns true for the start location.
    pub fn is_start(self) -> bool {
        self == Self::START
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a player. Assigned by the world on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named place in the world graph. Names need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier of this location.
    pub id: LocationId,
    /// Display name of this location.
    pub name: String,
}

impl Location {
    /// Create a location value. Only the world hands out ids.
    pub(crate) fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An actor occupying exactly one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier of this player.
    pub id: PlayerId,
    /// Display name of this player.
    pub name: String,
    /// The location the player currently occupies. Always exists.
    pub location: LocationId,
}

/// Names a location either by its name or by its id.
///
/// Produced by the grammar so the executor never has to inspect token shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSelector {
    /// Match locations with exactly this name.
    ByName(String),
    /// Match the location with this id.
    ById(LocationId),
}

impl LocationSelector {
    /// Returns true if `location` is selected.
    pub fn matches(&self, location: &Location) -> bool {
        match self {
            Self::ByName(name) => location.name == *name,
            Self::ById(id) => location.id == *id,
        }
    }
}

impl fmt::Display for LocationSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => write!(f, "\"{name}\""),
            Self::ById(id) => write!(f, "location {id}"),
        }
    }
}
