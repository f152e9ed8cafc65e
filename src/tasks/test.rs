//! The `test` task: runs tests via `pub run test`.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

use super::runner;
use crate::config::TestConfig;

/// Runs the configured unit and integration tests and returns the test
/// runner's exit code.
pub fn run(root: &Path, config: &TestConfig) -> Result<i32> {
    runner::run_tool(command(root, config))
}

fn command(root: &Path, config: &TestConfig) -> Command {
    let mut command = Command::new("pub");
    command.current_dir(root).args(["run", "test"]);
    for platform in &config.platforms {
        command.args(["-p", platform]);
    }
    command.args(&config.unit_tests);
    command.args(&config.integration_tests);

    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(command: &Command) -> Vec<String> {
        command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn default_invocation() {
        let dir = TempDir::new().unwrap();

        let command = command(dir.path(), &TestConfig::default());
        assert_eq!(command.get_program(), "pub");
        assert_eq!(args(&command), vec!["run", "test", "test/"]);
    }

    #[test]
    fn platforms_and_integration_tests() {
        let dir = TempDir::new().unwrap();
        let config = TestConfig {
            unit_tests: vec!["test/unit/".to_string()],
            integration_tests: vec!["test/integration/".to_string()],
            platforms: vec!["vm".to_string(), "chrome".to_string()],
        };

        let command = command(dir.path(), &config);
        assert_eq!(
            args(&command),
            vec![
                "run",
                "test",
                "-p",
                "vm",
                "-p",
                "chrome",
                "test/unit/",
                "test/integration/"
            ]
        );
    }
}
