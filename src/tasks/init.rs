//! The `init` task: writes the `tool/dev.toml` configuration template.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::TaskError;
use crate::config::CONFIG_PATH;

/// Commented template enumerating every recognized option with its
/// default. Parses as an empty overlay until the user uncomments values.
const CONFIG_TEMPLATE: &str = r#"# dart_dev configuration
#
# Every option is listed with its built-in default. Uncomment and edit a
# line to override it. CLI flags take precedence over values set here.

[analyze]
# Files or directories to analyze. Directories are expanded one level
# deep into the .dart files directly inside them.
# entry_points = ["lib/"]
# Treat analyzer warnings as fatal.
# fatal_warnings = true
# Enable analyzer hints.
# hints = true

[examples]
# Hostname and port the example server binds to.
# hostname = "localhost"
# port = 8080

[format]
# Report formatting diffs without rewriting files (exit 1 on diff).
# check = false
# Directories (or files) to format.
# directories = ["lib/"]

[test]
# Unit and integration test paths, and the platforms to run on.
# unit_tests = ["test/"]
# integration_tests = []
# platforms = []
"#;

/// Writes the configuration template to `<root>/tool/dev.toml`.
///
/// Refuses to overwrite an existing file unless `force` is set, so a
/// hand-edited configuration is never silently clobbered.
pub fn run(root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_PATH);
    if path.exists() && !force {
        return Err(TaskError::FileExists { path }.into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config template: {}", path.display()))
}
