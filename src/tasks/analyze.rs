//! The `analyze` task: static analysis via `dartanalyzer`.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

use super::{expand, runner};
use crate::config::AnalyzeConfig;

/// Analyzes the configured entry points and returns the analyzer's exit
/// code.
pub fn run(root: &Path, config: &AnalyzeConfig) -> Result<i32> {
    runner::run_tool(command(root, config)?)
}

fn command(root: &Path, config: &AnalyzeConfig) -> Result<Command> {
    let files = expand::expand_entry_points(root, &config.entry_points)?;

    let mut command = Command::new("dartanalyzer");
    command.current_dir(root);
    if config.fatal_warnings {
        command.arg("--fatal-warnings");
    }
    if !config.hints {
        command.arg("--no-hints");
    }
    command.args(&files);

    Ok(command)
}
