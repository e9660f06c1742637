use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::entity::{Location, LocationId, LocationSelector, Player, PlayerId};
use crate::error::{WorldError, WorldResult};
use crate::link::Link;

/// Name of the location every world starts with.
pub const START_NAME: &str = "start";

/// A location together with its residents and outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationInfo {
    /// The location itself.
    pub location: Location,
    /// Players currently at the location, by ascending id.
    pub players: Vec<Player>,
    /// Links leaving the location, by ascending destination id.
    pub links: Vec<Link>,
}

/// A player together with the location they occupy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerInfo {
    /// The player itself.
    pub player: Player,
    /// The player's current location.
    pub location: Location,
}

/// A copy of every entity in the world, each list in id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldSnapshot {
    /// All locations.
    pub locations: Vec<Location>,
    /// All players.
    pub players: Vec<Player>,
    /// All links, ordered by `(from, to)`.
    pub links: Vec<Link>,
}

/// What removing a location took with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRemoval {
    /// The removed location.
    pub location: Location,
    /// Links that had the location as either endpoint.
    pub links: Vec<Link>,
    /// Players moved back to the start location.
    pub relocated: Vec<PlayerId>,
}

/// The world store. Owns all locations, players, and links.
///
/// Every method either applies completely or leaves the world untouched:
/// fallible operations validate before they mutate.
#[derive(Debug, Clone)]
pub struct World {
    locations: BTreeMap<LocationId, Location>,
    players: BTreeMap<PlayerId, Player>,
    links: BTreeSet<Link>,

    next_location: i64,
    next_player: i64,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a world holding only the start location.
    pub fn new() -> Self {
        let mut locations = BTreeMap::new();
        locations.insert(
            LocationId::START,
            Location::new(LocationId::START, START_NAME),
        );
        Self {
            locations,
            players: BTreeMap::new(),
            links: BTreeSet::new(),
            next_location: LocationId::START.0 + 1,
            next_player: 1,
        }
    }

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    /// Add a location with a fresh id.
    pub fn create_location(&mut self, name: impl Into<String>) -> Location {
        let id = LocationId(self.next_location);
        self.next_location += 1;

        let location = Location::new(id, name);
        debug!(id = %id, name = %location.name, "created location");
        self.locations.insert(id, location.clone());
        location
    }

    /// Remove a location.
    ///
    /// Links touching the location are deleted and its players are moved to
    /// the start location before the location itself goes away.
    pub fn remove_location(&mut self, id: LocationId) -> WorldResult<LocationRemoval> {
        if id.is_start() {
            return Err(WorldError::StartLocation(id));
        }
        if !self.locations.contains_key(&id) {
            return Err(WorldError::LocationNotFound(id));
        }

        let links: Vec<Link> = self.links.iter().filter(|l| l.touches(id)).copied().collect();
        self.links.retain(|l| !l.touches(id));

        let mut relocated = Vec::new();
        for player in self.players.values_mut().filter(|p| p.location == id) {
            player.location = LocationId::START;
            relocated.push(player.id);
        }

        let location = self
            .locations
            .remove(&id)
            .ok_or(WorldError::LocationNotFound(id))?;

        debug!(
            id = %id,
            links = links.len(),
            relocated = relocated.len(),
            "removed location"
        );
        Ok(LocationRemoval {
            location,
            links,
            relocated,
        })
    }

    /// Get a location by id.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// All locations with exactly this name, by ascending id.
    pub fn locations_by_name(&self, name: &str) -> Vec<&Location> {
        self.locations.values().filter(|l| l.name == name).collect()
    }

    /// A location with its current players and outbound links.
    pub fn location_info(&self, id: LocationId) -> WorldResult<LocationInfo> {
        let location = self
            .locations
            .get(&id)
            .ok_or(WorldError::LocationNotFound(id))?;

        Ok(LocationInfo {
            location: location.clone(),
            players: self
                .players
                .values()
                .filter(|p| p.location == id)
                .cloned()
                .collect(),
            links: self.links_from(id).copied().collect(),
        })
    }

    // -----------------------------------------------------------------------
    // Players
    // -----------------------------------------------------------------------

    /// Add a player with a fresh id at the start location.
    pub fn create_player(&mut self, name: impl Into<String>) -> Player {
        let id = PlayerId(self.next_player);
        self.next_player += 1;

        let player = Player {
            id,
            name: name.into(),
            location: LocationId::START,
        };
        debug!(id = %id, name = %player.name, "created player");
        self.players.insert(id, player.clone());
        player
    }

    /// Remove a player.
    pub fn remove_player(&mut self, id: PlayerId) -> WorldResult<Player> {
        let player = self
            .players
            .remove(&id)
            .ok_or(WorldError::PlayerNotFound(id))?;
        debug!(id = %id, "removed player");
        Ok(player)
    }

    /// Get a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// All players with exactly this name, by ascending id.
    pub fn players_by_name(&self, name: &str) -> Vec<&Player> {
        self.players.values().filter(|p| p.name == name).collect()
    }

    /// A player with the location they occupy.
    pub fn player_info(&self, id: PlayerId) -> WorldResult<PlayerInfo> {
        let player = self.players.get(&id).ok_or(WorldError::PlayerNotFound(id))?;
        let location = self
            .locations
            .get(&player.location)
            .ok_or(WorldError::LocationNotFound(player.location))?;

        Ok(PlayerInfo {
            player: player.clone(),
            location: location.clone(),
        })
    }

    // -----------------------------------------------------------------------
    // Links
    // -----------------------------------------------------------------------

    /// Add a directed link between two existing locations.
    pub fn create_link(&mut self, from: LocationId, to: LocationId) -> WorldResult<Link> {
        for endpoint in [from, to] {
            if !self.locations.contains_key(&endpoint) {
                return Err(WorldError::DanglingEndpoint(endpoint));
            }
        }

        let link = Link::new(from, to);
        if !self.links.insert(link) {
            return Err(WorldError::DuplicateLink { from, to });
        }
        debug!(%link, "created link");
        Ok(link)
    }

    /// Remove the link with exactly these endpoints.
    pub fn remove_link(&mut self, from: LocationId, to: LocationId) -> WorldResult<Link> {
        let link = Link::new(from, to);
        if !self.links.remove(&link) {
            return Err(WorldError::LinkNotFound { from, to });
        }
        debug!(%link, "removed link");
        Ok(link)
    }

    /// Returns true if the link `from -> to` exists.
    pub fn has_link(&self, from: LocationId, to: LocationId) -> bool {
        self.links.contains(&Link::new(from, to))
    }

    /// Links leaving `from`, by ascending destination id.
    pub fn links_from(&self, from: LocationId) -> impl Iterator<Item = &Link> {
        self.links
            .range(Link::new(from, LocationId(i64::MIN))..=Link::new(from, LocationId(i64::MAX)))
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Locations one outbound link away from the player's current location.
    pub fn look_from(&self, player: PlayerId) -> WorldResult<Vec<Location>> {
        let current = self.current_location(player)?;
        Ok(self.reachable_from(current).cloned().collect())
    }

    /// Move a player along one outbound link.
    ///
    /// Candidates are the destinations of links leaving the player's current
    /// location. When several candidates share the requested name, the one
    /// with the largest id wins.
    pub fn move_player(
        &mut self,
        player: PlayerId,
        destination: &LocationSelector,
    ) -> WorldResult<Location> {
        let current = self.current_location(player)?;

        let target = self
            .reachable_from(current)
            .filter(|l| destination.matches(l))
            .max_by_key(|l| l.id)
            .cloned()
            .ok_or_else(|| WorldError::NoRoute {
                from: current,
                destination: destination.clone(),
            })?;

        let entry = self
            .players
            .get_mut(&player)
            .ok_or(WorldError::PlayerNotFound(player))?;
        entry.location = target.id;

        debug!(player = %player, from = %current, to = %target.id, "moved player");
        Ok(target)
    }

    fn current_location(&self, player: PlayerId) -> WorldResult<LocationId> {
        self.players
            .get(&player)
            .map(|p| p.location)
            .ok_or(WorldError::PlayerNotFound(player))
    }

    fn reachable_from(&self, from: LocationId) -> impl Iterator<Item = &Location> {
        self.links_from(from)
            .filter_map(|link| self.locations.get(&link.to))
    }

    // -----------------------------------------------------------------------
    // Whole-world views
    // -----------------------------------------------------------------------

    /// Copy every location, player, and link.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            locations: self.locations.values().cloned().collect(),
            players: self.players.values().cloned().collect(),
            links: self.links.iter().copied().collect(),
        }
    }

    /// Number of locations, the start location included.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
