//! World store for Pfadfinder: locations, players, links, and movement.
//!
//! This crate owns the entity collections and every integrity rule. It does
//! no parsing and no I/O; the grammar and console crates drive it through
//! the operations on [`World`], which are the only way to mutate it.

/// Location and player types, identifiers, and selectors.
pub mod entity;
/// Error types and failure classification.
pub mod error;
/// Directed links between locations.
pub mod link;
/// The world store that owns locations, players, and links.
pub mod world;

/// Re-export entity types.
pub use entity::{Location, LocationId, LocationSelector, Player, PlayerId};
/// Re-export error types.
pub use error::{FailureKind, WorldError, WorldResult};
/// Re-export link type.
pub use link::Link;
/// Re-export world store types.
pub use world::{LocationInfo, LocationRemoval, PlayerInfo, World, WorldSnapshot};
