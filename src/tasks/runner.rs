//! External tool invocation

use std::process::Command;

use anyhow::Result;

use super::TaskError;

/// Runs an external tool to completion, inheriting stdio, and returns its
/// exit code verbatim. A non-zero exit is not an error here; the caller
/// relays it to the process boundary. Only a failure to launch the tool
/// at all is an error. No timeout is imposed; a hanging tool hangs the
/// invocation.
pub fn run_tool(mut command: Command) -> Result<i32> {
    let tool = command.get_program().to_string_lossy().into_owned();

    let status = command
        .status()
        .map_err(|source| TaskError::Launch { tool, source })?;

    // A signal-terminated child reports no code.
    Ok(status.code().unwrap_or(1))
}
