//! The sample world and the canned walkthrough script.

use pf_core::{LocationId, World, WorldResult};

/// Commands run by the `demo` walkthrough, in order.
///
/// Written against [`demo_world`]: `work` is location 1, `home` is
/// location 2, and `bob` is player 1.
pub const DEMO_SCRIPT: &[&str] = &[
    "help",
    "info location home",
    "info location work",
    "create link 1 2",
    "look player 1",
    "info all",
    "info player 1",
    "info location home",
    "move player 1 location start",
    "info player 1",
    "info location start",
    "remove location 1",
    "remove link 1 2",
    "info all",
];

/// Build the sample world: two places reachable from the start, a way back
/// from each, and one player.
pub fn demo_world() -> WorldResult<World> {
    let mut world = World::new();
    let work = world.create_location("work");
    let home = world.create_location("home");
    world.create_player("bob");

    world.create_link(LocationId::START, work.id)?;
    world.create_link(LocationId::START, home.id)?;
    world.create_link(home.id, LocationId::START)?;
    world.create_link(work.id, LocationId::START)?;
    Ok(world)
}
