//! The command executor.

use pf_core::{LocationSelector, World};
use pf_grammar::{Command, ParseError, PlayerSelector};
use tracing::debug;

use crate::help::HELP_TEXT;
use crate::outcome::{Outcome, Report};

/// Executes commands against a world it owns.
///
/// Each command maps to exactly one world operation. `help` and `quit`
/// never touch the world.
#[derive(Debug, Clone, Default)]
pub struct Console {
    world: World,
}

impl Console {
    /// Create a console over an existing world.
    pub fn new(world: World) -> Self {
        Self { world }
    }

    /// The world being manipulated.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Parse and execute one command line.
    pub fn process(&mut self, line: &str) -> Result<Outcome, ParseError> {
        let command = pf_grammar::parse(line)?;
        Ok(self.execute(command))
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!(%command, "executing");
        let outcome = match command {
            Command::CreateLocation { name } => {
                Outcome::Ok(Report::LocationCreated(self.world.create_location(name)))
            }
            Command::CreatePlayer { name } => {
                Outcome::Ok(Report::PlayerCreated(self.world.create_player(name)))
            }
            Command::CreateLink { from, to } => self
                .world
                .create_link(from, to)
                .map(Report::LinkCreated)
                .into(),
            Command::RemoveLocation { id } => self
                .world
                .remove_location(id)
                .map(Report::LocationRemoved)
                .into(),
            Command::RemovePlayer { id } => self
                .world
                .remove_player(id)
                .map(Report::PlayerRemoved)
                .into(),
            Command::RemoveLink { from, to } => self
                .world
                .remove_link(from, to)
                .map(Report::LinkRemoved)
                .into(),
            Command::InfoLocation {
                selector: LocationSelector::ByName(name),
            } => Outcome::Ok(Report::Locations(
                self.world
                    .locations_by_name(&name)
                    .into_iter()
                    .cloned()
                    .collect(),
            )),
            Command::InfoLocation {
                selector: LocationSelector::ById(id),
            } => self.world.location_info(id).map(Report::Location).into(),
            Command::InfoPlayer {
                selector: PlayerSelector::ByName(name),
            } => Outcome::Ok(Report::Players(
                self.world
                    .players_by_name(&name)
                    .into_iter()
                    .cloned()
                    .collect(),
            )),
            Command::InfoPlayer {
                selector: PlayerSelector::ById(id),
            } => self.world.player_info(id).map(Report::Player).into(),
            Command::InfoAll => Outcome::Ok(Report::All(self.world.snapshot())),
            Command::Move {
                player,
                destination,
            } => self
                .world
                .move_player(player, &destination)
                .map(|location| Report::Moved { player, location })
                .into(),
            Command::Look { player } => self
                .world
                .look_from(player)
                .map(|locations| Report::Exits { player, locations })
                .into(),
            Command::Help => Outcome::Ok(Report::Help(HELP_TEXT)),
            Command::Quit => Outcome::Quit,
        };

        if let Some(err) = outcome.error() {
            debug!(%err, "command failed");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{Link, LocationId, PlayerId, WorldError};

    fn run(console: &mut Console, line: &str) -> Outcome {
        console.process(line).unwrap()
    }

    #[test]
    fn movement_scenario() {
        let mut console = Console::default();

        match run(&mut console, "create location home") {
            Outcome::Ok(Report::LocationCreated(location)) => {
                assert_eq!(location.id, LocationId(1));
                assert_eq!(location.name, "home");
            }
            other => panic!("expected created location, got {other:?}"),
        }
        match run(&mut console, "create player bob") {
            Outcome::Ok(Report::PlayerCreated(player)) => {
                assert_eq!(player.id, PlayerId(1));
                assert_eq!(player.location, LocationId::START);
            }
            other => panic!("expected created player, got {other:?}"),
        }
        assert!(matches!(run(&mut console, "create link 0 1"), Outcome::Ok(_)));

        let outcome = run(&mut console, "move player 1 home");
        assert!(matches!(outcome, Outcome::Ok(_)), "{outcome:?}");
        assert_eq!(
            console.world().player(PlayerId(1)).unwrap().location,
            LocationId(1)
        );

        let outcome = run(&mut console, "move player 1 home");
        assert!(matches!(outcome, Outcome::NoRoute(_)), "{outcome:?}");
        assert_eq!(
            console.world().player(PlayerId(1)).unwrap().location,
            LocationId(1)
        );
    }

    #[test]
    fn failed_move_names_the_destination() {
        let mut console = Console::default();
        run(&mut console, "create location home");
        run(&mut console, "create player bob");

        let outcome = run(&mut console, "move player 1 home");
        let message = outcome.error().map(ToString::to_string).unwrap_or_default();
        insta::assert_snapshot!(message, @r#"no route from location 0 to "home""#);

        let outcome = run(&mut console, "move player 1 location 1");
        let message = outcome.error().map(ToString::to_string).unwrap_or_default();
        insta::assert_snapshot!(message, @"no route from location 0 to location 1");
    }

    #[test]
    fn duplicate_link_scenario() {
        let mut console = Console::default();
        run(&mut console, "create location home");
        assert!(matches!(run(&mut console, "create link 0 1"), Outcome::Ok(_)));

        let outcome = run(&mut console, "create link 0 1");
        assert_eq!(
            outcome,
            Outcome::Integrity(WorldError::DuplicateLink {
                from: LocationId(0),
                to: LocationId(1),
            })
        );
        assert_eq!(console.world().link_count(), 1);
        assert!(console.world().has_link(LocationId(0), LocationId(1)));
    }

    #[test]
    fn link_to_missing_location_is_integrity_error() {
        let mut console = Console::default();
        let outcome = run(&mut console, "create link 0 4");
        assert!(matches!(outcome, Outcome::Integrity(_)));
    }

    #[test]
    fn removals_report_not_found() {
        let mut console = Console::default();
        assert!(matches!(
            run(&mut console, "remove location 0"),
            Outcome::NotFound(WorldError::StartLocation(_))
        ));
        assert!(matches!(
            run(&mut console, "remove location 3"),
            Outcome::NotFound(_)
        ));
        assert!(matches!(
            run(&mut console, "remove player 1"),
            Outcome::NotFound(_)
        ));
        assert!(matches!(
            run(&mut console, "remove link 0 1"),
            Outcome::NotFound(_)
        ));
    }

    #[test]
    fn remove_location_reports_cascade() {
        let mut console = Console::default();
        run(&mut console, "create location home");
        run(&mut console, "create player bob");
        run(&mut console, "create link 0 1");
        run(&mut console, "create link 1 0");
        run(&mut console, "move player 1 home");

        match run(&mut console, "remove location 1") {
            Outcome::Ok(Report::LocationRemoved(removal)) => {
                assert_eq!(
                    removal.links,
                    vec![
                        Link::new(LocationId(0), LocationId(1)),
                        Link::new(LocationId(1), LocationId(0)),
                    ]
                );
                assert_eq!(removal.relocated, vec![PlayerId(1)]);
            }
            other => panic!("expected removal, got {other:?}"),
        }
        assert_eq!(
            console.world().player(PlayerId(1)).unwrap().location,
            LocationId::START
        );
    }

    #[test]
    fn info_by_name_and_id() {
        let mut console = Console::default();
        run(&mut console, "create location home");
        run(&mut console, "create location home");
        run(&mut console, "create player bob");

        match run(&mut console, "info location home") {
            Outcome::Ok(Report::Locations(found)) => assert_eq!(found.len(), 2),
            other => panic!("expected locations, got {other:?}"),
        }
        match run(&mut console, "info location 0") {
            Outcome::Ok(Report::Location(info)) => {
                assert_eq!(info.location.name, "start");
                assert_eq!(info.players.len(), 1);
            }
            other => panic!("expected location info, got {other:?}"),
        }
        match run(&mut console, "info player bob") {
            Outcome::Ok(Report::Players(found)) => assert_eq!(found.len(), 1),
            other => panic!("expected players, got {other:?}"),
        }
        match run(&mut console, "info player 1") {
            Outcome::Ok(Report::Player(info)) => assert_eq!(info.location.name, "start"),
            other => panic!("expected player info, got {other:?}"),
        }
        assert!(matches!(
            run(&mut console, "info location 9"),
            Outcome::NotFound(_)
        ));
    }

    #[test]
    fn info_all_returns_snapshot() {
        let mut console = Console::default();
        run(&mut console, "create location home");
        run(&mut console, "create link 0 1");
        match run(&mut console, "info all") {
            Outcome::Ok(Report::All(snapshot)) => {
                assert_eq!(snapshot.locations.len(), 2);
                assert_eq!(snapshot.links.len(), 1);
                assert!(snapshot.players.is_empty());
            }
            other => panic!("expected snapshot, got {other:?}"),
        }
    }

    #[test]
    fn look_lists_exits() {
        let mut console = Console::default();
        run(&mut console, "create location home");
        run(&mut console, "create player bob");
        run(&mut console, "create link 0 1");
        match run(&mut console, "look player 1") {
            Outcome::Ok(Report::Exits { player, locations }) => {
                assert_eq!(player, PlayerId(1));
                assert_eq!(locations.len(), 1);
                assert_eq!(locations[0].name, "home");
            }
            other => panic!("expected exits, got {other:?}"),
        }
        assert!(matches!(
            run(&mut console, "look player 2"),
            Outcome::NotFound(_)
        ));
    }

    #[test]
    fn move_by_location_id() {
        let mut console = Console::default();
        run(&mut console, "create location home");
        run(&mut console, "create player bob");
        run(&mut console, "create link 0 1");
        match run(&mut console, "move player 1 location 1") {
            Outcome::Ok(Report::Moved { player, location }) => {
                assert_eq!(player, PlayerId(1));
                assert_eq!(location.id, LocationId(1));
            }
            other => panic!("expected move, got {other:?}"),
        }
    }

    #[test]
    fn help_and_quit_bypass_the_world() {
        let mut console = Console::default();
        assert_eq!(
            run(&mut console, "help"),
            Outcome::Ok(Report::Help(HELP_TEXT))
        );
        assert!(run(&mut console, "quit").is_quit());
        assert_eq!(console.world().location_count(), 1);
    }

    #[test]
    fn parse_errors_leave_world_untouched() {
        let mut console = Console::default();
        let err = console.process("create location 5").unwrap_err();
        assert_eq!(err.offset, Some(16));
        assert_eq!(console.world().location_count(), 1);
    }
}
