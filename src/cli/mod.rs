//! # Command-Line Interface
//!
//! Argument parsing, task dispatch, and output formatting.
//!
//! ## Tasks
//!
//! | Task | Underlying tool |
//! |------|-----------------|
//! | `analyze` | `dartanalyzer` |
//! | `examples` | `pub serve example` |
//! | `format` | `dartfmt` |
//! | `init` | (writes `tool/dev.toml`) |
//! | `test` | `pub run test` |
//!
//! ## Global Flags
//!
//! - `--color` / `--no-color` - colorize output (default: on)
//! - `-q`, `--quiet` - minimize logging
//! - `-h`, `--help` - usage help, task-specific when a task is given
//! - `--version` - print the package version
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments, resolve configuration, and execute
//! the selected task. The returned `ExitCode` relays the underlying tool's
//! exit code verbatim; usage and configuration errors use dedicated
//! sysexits-style codes (see [`exit`]).

mod app;
mod output;

pub use app::{exit, run, Cli, Commands};
pub use output::Output;
