use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::ops::Range;

/// Why a command line was rejected.
///
/// Spans and offsets count characters, not bytes, so they line up with what
/// the user typed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}{}", .offset.map(|o| format!(" (at offset {o})")).unwrap_or_default())]
pub struct ParseError {
    /// The rejected input, verbatim.
    pub line: String,
    /// Character offset of the failure, when one can be determined.
    pub offset: Option<usize>,
    /// Character range of the offending input.
    pub span: Range<usize>,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ParseError {
    /// Build an error from a byte range into `line`.
    pub fn new(line: &str, byte_span: Range<usize>, message: impl Into<String>) -> Self {
        let start = char_offset(line, byte_span.start);
        let end = char_offset(line, byte_span.end).max(start);
        Self {
            line: line.to_string(),
            offset: Some(start),
            span: start..end,
            message: message.into(),
        }
    }

    /// Render the error against its input line using ariadne.
    pub fn render(&self, source_name: &str, color: bool) -> String {
        let mut output = Vec::new();

        let report = Report::build(ReportKind::Error, (source_name, self.span.clone()))
            .with_config(Config::default().with_color(color))
            .with_message(&self.message)
            .with_label(
                Label::new((source_name, self.span.clone()))
                    .with_message("here")
                    .with_color(Color::Red),
            );

        report
            .finish()
            .write((source_name, Source::from(self.line.as_str())), &mut output)
            .ok();

        String::from_utf8(output).unwrap_or_default()
    }
}

/// Convert a byte index into `line` to a character index.
fn char_offset(line: &str, byte: usize) -> usize {
    line.char_indices().take_while(|(i, _)| *i < byte).count()
}
