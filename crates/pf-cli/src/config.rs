//! Shell configuration.

use clap::ValueEnum;

/// How outcomes are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines and tables.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Settings for one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Repeat each input line before its output.
    pub echo: bool,
    /// Prompt shown before each read, if any.
    pub prompt: Option<String>,
    /// Whether rendered output may contain ANSI colors.
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            echo: false,
            prompt: None,
            color: false,
        }
    }
}

impl ShellConfig {
    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables or disables echoing input lines.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Sets the prompt printed before each read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Enables or disables colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
