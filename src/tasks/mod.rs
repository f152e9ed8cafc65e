//! Task handlers
//!
//! One module per task. Each exposes `run`, which translates a resolved
//! configuration into an invocation of the corresponding Dart tool, runs it
//! to completion, and returns the tool's exit code unchanged. These
//! functions are also the programmatic API: call them directly with
//! `Default::default()` (or your own config) to bypass CLI parsing and file
//! loading entirely.

use std::path::PathBuf;

use thiserror::Error;

pub mod analyze;
pub mod examples;
pub mod format;
pub mod init;
pub mod test;

mod expand;
mod runner;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{} already exists (pass --force to overwrite)", path.display())]
    FileExists { path: PathBuf },

    #[error("Failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        source: std::io::Error,
    },
}
