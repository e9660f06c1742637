//! Command grammar for the Pfadfinder console.
//!
//! A command line is lexed with logos, matched against the command
//! vocabulary with chumsky, and turned into a typed [`Command`]. Anything
//! else becomes a [`ParseError`] that points at the offending input.
//! Parsing is pure: it never touches the world.

/// Typed commands produced by the grammar.
pub mod command;
/// Parse errors and their ariadne rendering.
pub mod diagnostics;
/// Tokenizer for command lines.
pub mod lexer;
/// The command grammar.
pub mod parser;

pub use command::{Command, PlayerSelector};
pub use diagnostics::ParseError;

/// Parse one command line.
///
/// Lexer errors win over grammar errors: the first bad character is
/// reported before the grammar ever runs.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let (tokens, lex_errors) = lexer::lex(line);

    if let Some(err) = lex_errors.into_iter().next() {
        return Err(ParseError::new(line, err.span, err.message));
    }
    if tokens.is_empty() {
        return Err(ParseError::new(line, 0..0, "empty command"));
    }

    parser::parse(&tokens).map_err(|errors| match errors.into_iter().next() {
        Some(err) => ParseError::new(line, err.span, err.message),
        None => ParseError {
            line: line.to_string(),
            offset: None,
            span: 0..line.chars().count(),
            message: "unrecognized command".to_string(),
        },
    })
}
