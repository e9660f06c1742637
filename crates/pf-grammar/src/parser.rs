use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;
use pf_core::{LocationId, LocationSelector, PlayerId};

use crate::command::{Command, PlayerSelector};
use crate::lexer::Token;

type Span = SimpleSpan;
type Extra<'a> = extra::Err<Rich<'a, Token>>;

/// Grammar error with the byte span of the offending token.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    /// Byte range in the input line.
    pub span: std::ops::Range<usize>,
    /// Human-readable description of the error.
    pub message: String,
}

// -- Terminals --

fn keyword<'a, I>(k: &'static str) -> impl Parser<'a, I, (), Extra<'a>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    select! { Token::Word(ref w) if w.as_str() == k => () }.labelled(k)
}

fn name<'a, I>() -> impl Parser<'a, I, String, Extra<'a>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    select! { Token::Word(w) => w }.labelled("name")
}

fn integer<'a, I>() -> impl Parser<'a, I, i64, Extra<'a>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    select! { Token::Integer(n) => n }.labelled("integer")
}

// -- Argument sub-grammars --

fn location_id<'a, I>() -> impl Parser<'a, I, LocationId, Extra<'a>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    integer().map(LocationId)
}

/// `player <id>`
fn player_id<'a, I>() -> impl Parser<'a, I, PlayerId, Extra<'a>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    keyword("player").ignore_then(integer()).map(PlayerId)
}

/// `<id> | <name>`, integer first so an id-shaped token is never a name.
fn location_selector<'a, I>() -> impl Parser<'a, I, LocationSelector, Extra<'a>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    choice((
        location_id().map(LocationSelector::ById),
        name().map(LocationSelector::ByName),
    ))
}

/// `location <id> | location <name> | <name>`
fn destination<'a, I>() -> impl Parser<'a, I, LocationSelector, Extra<'a>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    choice((
        keyword("location").ignore_then(location_selector()),
        name().map(LocationSelector::ByName),
    ))
    .labelled("destination")
}

/// Build the full command-line grammar.
fn command_parser<'a, I>() -> impl Parser<'a, I, Command, Extra<'a>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    let link = keyword("link").ignore_then(location_id().then(location_id()));

    let create = keyword("create")
        .ignore_then(choice((
            keyword("location")
                .ignore_then(name())
                .map(|name| Command::CreateLocation { name }),
            keyword("player")
                .ignore_then(name())
                .map(|name| Command::CreatePlayer { name }),
            link.clone()
                .map(|(from, to)| Command::CreateLink { from, to }),
        )))
        .labelled("create command");

    let remove = keyword("remove")
        .ignore_then(choice((
            keyword("location")
                .ignore_then(location_id())
                .map(|id| Command::RemoveLocation { id }),
            player_id().map(|id| Command::RemovePlayer { id }),
            link.map(|(from, to)| Command::RemoveLink { from, to }),
        )))
        .labelled("remove command");

    let player_selector = choice((
        integer().map(|n| PlayerSelector::ById(PlayerId(n))),
        name().map(PlayerSelector::ByName),
    ));

    let info = keyword("info")
        .ignore_then(choice((
            keyword("location")
                .ignore_then(location_selector())
                .map(|selector| Command::InfoLocation { selector }),
            keyword("player")
                .ignore_then(player_selector)
                .map(|selector| Command::InfoPlayer { selector }),
            keyword("all").to(Command::InfoAll),
        )))
        .labelled("info command");

    let move_cmd = keyword("move")
        .ignore_then(player_id())
        .then(destination())
        .map(|(player, destination)| Command::Move {
            player,
            destination,
        })
        .labelled("move command");

    let look = keyword("look")
        .ignore_then(player_id())
        .map(|player| Command::Look { player })
        .labelled("look command");

    choice((
        create,
        remove,
        info,
        move_cmd,
        look,
        keyword("help").to(Command::Help),
        keyword("quit").to(Command::Quit),
    ))
    .then_ignore(end())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a token stream into a command.
pub fn parse(tokens: &[(Token, std::ops::Range<usize>)]) -> Result<Command, Vec<SyntaxError>> {
    let token_iter = tokens
        .iter()
        .map(|(tok, span)| (tok.clone(), Span::from(span.clone())));

    let len = tokens.last().map_or(0, |(_, s)| s.end);
    let eoi: Span = (len..len).into();
    let stream = Stream::from_iter(token_iter).map(eoi, |(t, s): (_, _)| (t, s));

    let (output, errors) = command_parser().parse(stream).into_output_errors();

    match output {
        Some(command) if errors.is_empty() => Ok(command),
        _ => Err(errors
            .into_iter()
            .map(|e| {
                let span = e.span();
                SyntaxError {
                    span: span.into_range(),
                    message: e.to_string(),
                }
            })
            .collect()),
    }
}
