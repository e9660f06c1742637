//! Command executor for the Pfadfinder console.
//!
//! A [`Console`] owns the world and turns each parsed command into exactly
//! one world operation, reporting the result as an [`Outcome`]. It does no
//! I/O; rendering and the read loop belong to the caller.

/// The command executor.
pub mod console;
/// Sample world and walkthrough script.
pub mod demo;
/// Help text.
pub mod help;
/// Outcomes and reports.
pub mod outcome;

pub use console::Console;
pub use demo::{DEMO_SCRIPT, demo_world};
pub use help::HELP_TEXT;
pub use outcome::{Outcome, Report};
