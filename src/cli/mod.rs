//! Command Line Interface (CLI) layer for whiteout.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for a single input file. It wires
//! user-provided options to the library functionality exposed via
//! `whiteout::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
