//! Command Line Interface (CLI) layer for SQMEAN.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`). It wires user-provided options to the underlying library
//! functionality exposed via `sqmean::api`.
//!
//! If you are embedding SQMEAN into another application, prefer using the
//! `sqmean::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
