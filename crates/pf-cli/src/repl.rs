//! The read loop.

use std::io::{self, BufRead, Write};

use pf_console::{Console, DEMO_SCRIPT, Outcome};
use pf_grammar::ParseError;
use tracing::{debug, info};

use crate::config::{OutputFormat, ShellConfig};
use crate::render;

/// Shell meta-command that replays the walkthrough script.
const DEMO_COMMAND: &str = "demo";

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A console session reading commands line by line.
pub struct Shell {
    console: Console,
    config: ShellConfig,
}

impl Shell {
    /// Create a shell over a console.
    pub fn new(console: Console, config: ShellConfig) -> Self {
        Self { console, config }
    }

    /// The console being driven.
    #[cfg(test)]
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.config.prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                return Ok(());
            }

            if self.handle_line(line.trim_end_matches(['\r', '\n']), out)? == Flow::Quit {
                info!("session ended by quit");
                return Ok(());
            }
        }
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        if self.config.echo {
            writeln!(out, "> {line}")?;
        }
        if line.trim() == DEMO_COMMAND {
            self.run_demo(out)?;
            return Ok(Flow::Continue);
        }
        self.execute(line, out)
    }

    fn run_demo<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        info!(commands = DEMO_SCRIPT.len(), "running demo script");
        for line in DEMO_SCRIPT {
            writeln!(out, "> {line}")?;
            self.execute(line, out)?;
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let flow = match self.console.process(line) {
            Ok(outcome) => {
                self.write_outcome(&outcome, out)?;
                if outcome.is_quit() {
                    Flow::Quit
                } else {
                    Flow::Continue
                }
            }
            Err(err) => {
                debug!(%err, "parse failed");
                self.write_parse_error(&err, out)?;
                Flow::Continue
            }
        };
        Ok(flow)
    }

    fn write_outcome<W: Write>(&self, outcome: &Outcome, out: &mut W) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Text => writeln!(out, "{}", render::text(outcome)),
            OutputFormat::Json => {
                let value = render::json(outcome).map_err(io::Error::other)?;
                writeln!(out, "{value}")
            }
        }
    }

    fn write_parse_error<W: Write>(&self, err: &ParseError, out: &mut W) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Text => {
                writeln!(out, "{}", render::parse_error_text(err, self.config.color))
            }
            OutputFormat::Json => writeln!(out, "{}", render::parse_error_json(err)),
        }
    }
}
