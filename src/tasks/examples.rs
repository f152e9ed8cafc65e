//! The `examples` task: serves the `example/` directory via `pub serve`.
//!
//! Unlike the other tasks this one is long-running: the server inherits the
//! terminal and runs until an external interrupt stops it. Ctrl+C reaches
//! the child through the foreground process group; the handler just waits
//! for it to exit and relays the code.

use std::path::Path;
use std::process::Command;

use anyhow::{ensure, Result};

use super::runner;
use crate::config::ExamplesConfig;

/// Serves the examples on the configured hostname and port until the
/// server is interrupted.
pub fn run(root: &Path, config: &ExamplesConfig) -> Result<i32> {
    runner::run_tool(command(root, config)?)
}

fn command(root: &Path, config: &ExamplesConfig) -> Result<Command> {
    ensure!(config.port > 0, "examples port must be a positive integer");

    let mut command = Command::new("pub");
    command
        .current_dir(root)
        .args(["serve", "example"])
        .args(["--hostname", &config.hostname])
        .args(["--port", &config.port.to_string()]);

    Ok(command)
}
