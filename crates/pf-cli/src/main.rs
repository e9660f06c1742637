//! Interactive console for the Pfadfinder world simulator.

mod config;
mod render;
mod repl;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use miette::{IntoDiagnostic, WrapErr};
use pf_console::Console;
use pf_core::World;
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, ShellConfig};
use crate::repl::Shell;

#[derive(Parser)]
#[command(
    name = "pf",
    about = "Pfadfinder: build a world of linked locations and walk it",
    version
)]
struct Cli {
    /// Start from the sample world instead of an empty one
    #[arg(long)]
    demo_world: bool,

    /// Read commands from a file instead of standard input
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Echo each input line before its output
    #[arg(long)]
    echo: bool,

    /// Never use ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color && io::stdout().is_terminal();
    init_tracing(cli.verbose, !cli.no_color && io::stderr().is_terminal())?;
    colored::control::set_override(color);

    let world = if cli.demo_world {
        pf_console::demo_world()
            .into_diagnostic()
            .wrap_err("failed to build the sample world")?
    } else {
        World::new()
    };

    let mut config = ShellConfig::default()
        .with_format(cli.format)
        .with_echo(cli.echo)
        .with_color(color);
    if cli.script.is_none() && io::stdin().is_terminal() {
        config = config.with_prompt("> ");
    }

    let mut shell = Shell::new(Console::new(world), config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("cannot read script {}", path.display()))?;
            shell.run(BufReader::new(file), &mut out)
        }
        None => shell.run(io::stdin().lock(), &mut out),
    }
    .into_diagnostic()
    .wrap_err("console session failed")
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, ansi: bool) -> miette::Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .try_init()
        .map_err(|err| miette::miette!("failed to initialise logging: {err}"))
}
