//! What executing a command produced.

use pf_core::{
    FailureKind, Link, Location, LocationInfo, LocationRemoval, Player, PlayerId, PlayerInfo,
    WorldError, WorldResult, WorldSnapshot,
};
use serde::Serialize;

/// The payload of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", content = "data", rename_all = "snake_case")]
pub enum Report {
    /// A location was created.
    LocationCreated(Location),
    /// A player was created.
    PlayerCreated(Player),
    /// A link was created.
    LinkCreated(Link),
    /// A location was removed, along with what the removal cascaded to.
    LocationRemoved(LocationRemoval),
    /// A player was removed.
    PlayerRemoved(Player),
    /// A link was removed.
    LinkRemoved(Link),
    /// Locations matching a name lookup.
    Locations(Vec<Location>),
    /// One location with its residents and outbound links.
    Location(LocationInfo),
    /// Players matching a name lookup.
    Players(Vec<Player>),
    /// One player with their current location.
    Player(PlayerInfo),
    /// Every entity in the world.
    All(WorldSnapshot),
    /// Where a player can go from their current location.
    Exits {
        /// The player who looked around.
        player: PlayerId,
        /// Locations one link away.
        locations: Vec<Location>,
    },
    /// A player moved.
    Moved {
        /// The player who moved.
        player: PlayerId,
        /// The player's new location.
        location: Location,
    },
    /// Static help text.
    Help(&'static str),
}

/// The result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command succeeded.
    Ok(Report),
    /// A referenced entity does not exist.
    NotFound(WorldError),
    /// The command would break link integrity.
    Integrity(WorldError),
    /// A move destination is not reachable.
    NoRoute(WorldError),
    /// The session should end.
    Quit,
}

impl Outcome {
    /// Returns true for `Outcome::Quit`.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// The store error behind a failed outcome.
    pub fn error(&self) -> Option<&WorldError> {
        match self {
            Self::NotFound(err) | Self::Integrity(err) | Self::NoRoute(err) => Some(err),
            Self::Ok(_) | Self::Quit => None,
        }
    }
}

impl From<WorldError> for Outcome {
    fn from(err: WorldError) -> Self {
        match err.kind() {
            FailureKind::NotFound => Self::NotFound(err),
            FailureKind::Integrity => Self::Integrity(err),
            FailureKind::NoRoute => Self::NoRoute(err),
        }
    }
}

impl From<WorldResult<Report>> for Outcome {
    fn from(result: WorldResult<Report>) -> Self {
        match result {
            Ok(report) => Self::Ok(report),
            Err(err) => err.into(),
        }
    }
}
