use std::fmt;

use pf_core::{LocationId, LocationSelector, PlayerId};
use serde::Serialize;

/// Names a player either by name or by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSelector {
    /// Match players with exactly this name.
    ByName(String),
    /// Match the player with this id.
    ById(PlayerId),
}

/// A fully parsed and typed console command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// `create location <name>`
    CreateLocation {
        /// Name of the new location.
        name: String,
    },
    /// `create player <name>`
    CreatePlayer {
        /// Name of the new player.
        name: String,
    },
    /// `create link <from> <to>`
    CreateLink {
        /// Origin location.
        from: LocationId,
        /// Destination location.
        to: LocationId,
    },
    /// `remove location <id>`
    RemoveLocation {
        /// Location to remove.
        id: LocationId,
    },
    /// `remove player <id>`
    RemovePlayer {
        /// Player to remove.
        id: PlayerId,
    },
    /// `remove link <from> <to>`
    RemoveLink {
        /// Origin location.
        from: LocationId,
        /// Destination location.
        to: LocationId,
    },
    /// `info location <name>` or `info location <id>`
    InfoLocation {
        /// Which location(s) to describe.
        selector: LocationSelector,
    },
    /// `info player <name>` or `info player <id>`
    InfoPlayer {
        /// Which player(s) to describe.
        selector: PlayerSelector,
    },
    /// `info all`
    InfoAll,
    /// `move player <id> <name>` or `move player <id> location <id>`
    Move {
        /// The player to move.
        player: PlayerId,
        /// Where to go.
        destination: LocationSelector,
    },
    /// `look player <id>`
    Look {
        /// The player looking around.
        player: PlayerId,
    },
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Formats the command in its canonical input syntax.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateLocation { name } => write!(f, "create location {name}"),
            Self::CreatePlayer { name } => write!(f, "create player {name}"),
            Self::CreateLink { from, to } => write!(f, "create link {from} {to}"),
            Self::RemoveLocation { id } => write!(f, "remove location {id}"),
            Self::RemovePlayer { id } => write!(f, "remove player {id}"),
            Self::RemoveLink { from, to } => write!(f, "remove link {from} {to}"),
            Self::InfoLocation {
                selector: LocationSelector::ByName(name),
            } => write!(f, "info location {name}"),
            Self::InfoLocation {
                selector: LocationSelector::ById(id),
            } => write!(f, "info location {id}"),
            Self::InfoPlayer {
                selector: PlayerSelector::ByName(name),
            } => write!(f, "info player {name}"),
            Self::InfoPlayer {
                selector: PlayerSelector::ById(id),
            } => write!(f, "info player {id}"),
            Self::InfoAll => write!(f, "info all"),
            Self::Move {
                player,
                destination: LocationSelector::ByName(name),
            } => write!(f, "move player {player} {name}"),
            Self::Move {
                player,
                destination: LocationSelector::ById(id),
            } => write!(f, "move player {player} location {id}"),
            Self::Look { player } => write!(f, "look player {player}"),
            Self::Help => write!(f, "help"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_displays_with_location_keyword_for_ids() {
        let cmd = Command::Move {
            player: PlayerId(1),
            destination: LocationSelector::ById(LocationId(2)),
        };
        assert_eq!(cmd.to_string(), "move player 1 location 2");

        let cmd = Command::Move {
            player: PlayerId(1),
            destination: LocationSelector::ByName("home".into()),
        };
        assert_eq!(cmd.to_string(), "move player 1 home");
    }
}
