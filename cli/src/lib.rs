//! Degrees CLI: load a dataset, resolve two names, print how they connect.
//!
//! The binary in `main.rs` only parses arguments, installs logging and maps
//! the result of [`app::run`] to an exit code. Everything else lives here so
//! it can be driven with in-memory input and output.

#![forbid(unsafe_code)]

pub mod app;
pub mod args;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod report;

pub use app::run;
pub use args::Args;
pub use error::CliError;
