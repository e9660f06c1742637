/// Help text listing the command vocabulary.
pub const HELP_TEXT: &str = "\
Commands:
  create location <name>
  create player <name>
  create link <from_id> <to_id>
  remove location <id>
  remove player <id>
  remove link <from_id> <to_id>
  info location <name>
  info location <id>
  info player <name>
  info player <id>
  info all
  move player <id> <location_name>
  move player <id> location <id>
  look player <id>
  help
  quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_mentions_every_leading_keyword() {
        for keyword in ["create", "remove", "info", "move", "look", "help", "quit"] {
            assert!(HELP_TEXT.contains(keyword), "missing {keyword}");
        }
    }

    #[test]
    fn every_help_line_uses_known_syntax() {
        let commands: Vec<&str> = HELP_TEXT.lines().skip(1).map(str::trim).collect();
        assert_eq!(commands.len(), 16);
        assert!(commands.iter().all(|c| !c.is_empty()));
    }
}
