//! Turning outcomes into text or JSON.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use pf_console::{Outcome, Report};
use pf_core::{Link, Location, Player, WorldSnapshot};
use pf_grammar::ParseError;
use serde_json::{Value, json};

/// Printed when the user quits.
pub const FAREWELL: &str = "Thanks for playing!";

/// Render an outcome for a human reader.
pub fn text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Ok(report) => report_text(report),
        Outcome::NotFound(err) | Outcome::Integrity(err) | Outcome::NoRoute(err) => {
            format!("{} {err}", "error:".red().bold())
        }
        Outcome::Quit => FAREWELL.to_string(),
    }
}

/// Render a parse failure for a human reader, with the offending input
/// underlined.
pub fn parse_error_text(err: &ParseError, color: bool) -> String {
    let report = err.render("input", color);
    // The report header repeats the message.
    let snippet: Vec<&str> = report.lines().skip(1).collect();
    let mut out = format!("{} {err}", "error:".red().bold());
    if !snippet.is_empty() {
        out.push('\n');
        out.push_str(snippet.join("\n").trim_end());
    }
    out
}

/// Render an outcome as a single JSON object.
pub fn json(outcome: &Outcome) -> serde_json::Result<Value> {
    Ok(match outcome {
        Outcome::Ok(report) => json!({
            "status": "ok",
            "report": serde_json::to_value(report)?,
        }),
        Outcome::NotFound(err) | Outcome::Integrity(err) | Outcome::NoRoute(err) => json!({
            "status": err.kind(),
            "message": err.to_string(),
        }),
        Outcome::Quit => json!({
            "status": "quit",
            "message": FAREWELL,
        }),
    })
}

/// Render a parse failure as a single JSON object.
pub fn parse_error_json(err: &ParseError) -> Value {
    json!({
        "status": "parse_error",
        "message": err.message,
        "offset": err.offset,
        "line": err.line,
    })
}

fn report_text(report: &Report) -> String {
    match report {
        Report::LocationCreated(location) => {
            format!("Created location {}", location_label(location))
        }
        Report::PlayerCreated(player) => format!(
            "Created player {} at location {}",
            player_label(player),
            player.location
        ),
        Report::LinkCreated(link) => format!("Created link {link}"),
        Report::LocationRemoved(removal) => format!(
            "Removed location {} ({} {} removed, {} {} returned to start)",
            location_label(&removal.location),
            removal.links.len(),
            plural(removal.links.len(), "link", "links"),
            removal.relocated.len(),
            plural(removal.relocated.len(), "player", "players"),
        ),
        Report::PlayerRemoved(player) => format!("Removed player {}", player_label(player)),
        Report::LinkRemoved(link) => format!("Removed link {link}"),
        Report::Locations(locations) if locations.is_empty() => {
            "No matching locations.".to_string()
        }
        Report::Locations(locations) => location_table(locations).to_string(),
        Report::Location(info) => {
            let players = if info.players.is_empty() {
                "none".to_string()
            } else {
                info.players
                    .iter()
                    .map(|p| format!("{} ({})", p.name, p.id))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let heading = format!("location {}", location_label(&info.location));
            format!(
                "{}\n  players: {players}\n  exits:   {}",
                heading.as_str().bold(),
                link_list(&info.links),
            )
        }
        Report::Players(players) if players.is_empty() => "No matching players.".to_string(),
        Report::Players(players) => player_table(players).to_string(),
        Report::Player(info) => {
            let heading = format!("player {}", player_label(&info.player));
            format!(
                "{} is at location {}",
                heading.as_str().bold(),
                location_label(&info.location)
            )
        }
        Report::All(snapshot) => snapshot_text(snapshot),
        Report::Exits { player, locations } if locations.is_empty() => {
            format!("Player {player} has nowhere to go.")
        }
        Report::Exits { player, locations } => {
            format!("Player {player} can go to:\n{}", location_table(locations))
        }
        Report::Moved { player, location } => {
            format!("Player {player} moved to location {}", location_label(location))
        }
        Report::Help(help) => help.to_string(),
    }
}

fn snapshot_text(snapshot: &WorldSnapshot) -> String {
    let mut sections = vec![
        "Locations".bold().to_string(),
        location_table(&snapshot.locations).to_string(),
        "Players".bold().to_string(),
    ];
    if snapshot.players.is_empty() {
        sections.push("  (none)".to_string());
    } else {
        sections.push(player_table(&snapshot.players).to_string());
    }
    sections.push("Links".bold().to_string());
    if snapshot.links.is_empty() {
        sections.push("  (none)".to_string());
    } else {
        let mut table = new_table(vec!["From", "To"]);
        for link in &snapshot.links {
            table.add_row(vec![link.from.to_string(), link.to.to_string()]);
        }
        sections.push(table.to_string());
    }
    sections.join("\n")
}

fn location_table(locations: &[Location]) -> Table {
    let mut table = new_table(vec!["ID", "Name"]);
    for location in locations {
        table.add_row(vec![location.id.to_string(), location.name.clone()]);
    }
    table
}

fn player_table(players: &[Player]) -> Table {
    let mut table = new_table(vec!["ID", "Name", "Location"]);
    for player in players {
        table.add_row(vec![
            player.id.to_string(),
            player.name.clone(),
            player.location.to_string(),
        ]);
    }
    table
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn link_list(links: &[Link]) -> String {
    if links.is_empty() {
        return "none".to_string();
    }
    links
        .iter()
        .map(Link::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn location_label(location: &Location) -> String {
    format!("{} \"{}\"", location.id, location.name)
}

fn player_label(player: &Player) -> String {
    format!("{} \"{}\"", player.id, player.name)
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
