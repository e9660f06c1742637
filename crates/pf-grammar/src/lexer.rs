use logos::Logos;
use std::fmt;

/// Token type for console commands.
///
/// Keywords are not special at this level: `create`, `location`, and `home`
/// are all `Token::Word`. The parser decides which words are keywords from
/// their position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Alphabetic word (keyword or name, disambiguated by the parser).
    Word(String),
    /// Decimal integer literal with optional sign.
    Integer(i64),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => write!(f, "{w}"),
            Token::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Internal logos token, converted to an owned `Token` after lexing.
#[derive(Logos, Debug)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[+-]?[0-9]+")]
    Integer,

    #[regex(r"[A-Za-z]+")]
    Word,

    /// Any other whitespace-delimited chunk, such as `7a` or `1-2`.
    #[regex(r"[^ \t\r\n\f]+", priority = 0)]
    Malformed,
}

/// A lexer error with its byte range in the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte range of the offending input.
    pub span: std::ops::Range<usize>,
    /// Human-readable description of the error.
    pub message: String,
}

/// Lex a command line into `(Token, byte span)` pairs.
///
/// Tokens must be separated by whitespace: a chunk that is neither all
/// letters nor an integer is an error. Lexing continues past errors so every
/// bad chunk is reported.
pub fn lex(source: &str) -> (Vec<(Token, std::ops::Range<usize>)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(RawToken::Integer) => {
                let raw = lexer.slice();
                match raw.parse::<i64>() {
                    Ok(n) => tokens.push((Token::Integer(n), span)),
                    Err(_) => errors.push(LexError {
                        span,
                        message: format!("integer literal out of range: {raw}"),
                    }),
                }
            }
            Ok(RawToken::Word) => tokens.push((Token::Word(lexer.slice().to_string()), span)),
            Ok(RawToken::Malformed) => errors.push(LexError {
                message: format!("expected a word or an integer, found {:?}", lexer.slice()),
                span,
            }),
            Err(()) => {
                errors.push(LexError {
                    span: span.clone(),
                    message: format!("unexpected character: {:?}", &source[span]),
                });
            }
        }
    }

    (tokens, errors)
}
