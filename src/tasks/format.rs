//! The `format` task: source formatting via `dartfmt`.
//!
//! Without `check`, files are rewritten in place; not safe to run
//! concurrently with another task reading the same files. With `check`,
//! nothing is written and the formatter exits 1 when a diff exists; that
//! code is relayed verbatim.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

use super::{expand, runner};
use crate::config::FormatConfig;

/// Formats (or checks) the configured directories and returns the
/// formatter's exit code.
pub fn run(root: &Path, config: &FormatConfig) -> Result<i32> {
    runner::run_tool(command(root, config)?)
}

fn command(root: &Path, config: &FormatConfig) -> Result<Command> {
    let files = expand::expand_entry_points(root, &config.directories)?;

    let mut command = Command::new("dartfmt");
    command.current_dir(root);
    if config.check {
        command.args(["-n", "--set-exit-if-changed"]);
    } else {
        command.arg("-w");
    }
    command.args(&files);

    Ok(command)
}
