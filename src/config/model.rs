//! Per-task configuration model
//!
//! Config structs are immutable templates; merging never mutates in place,
//! it produces a new value. Sequence-valued fields replace wholesale when an
//! overlay sets them (no append semantics).

use serde::Deserialize;

/// A configuration that can be layered with a partial overlay.
///
/// `merge` is pure: for each field it takes the overlay's value when
/// explicitly set, else the base's.
pub trait Layered: Default + Clone {
    type Overlay: Default;

    fn merge(&self, overlay: &Self::Overlay) -> Self;
}

/// Configuration for the `analyze` task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeConfig {
    /// Files or directories handed to the analyzer. Directories are
    /// expanded one level deep into the `.dart` files directly inside.
    pub entry_points: Vec<String>,

    /// Treat analyzer warnings as fatal.
    pub fatal_warnings: bool,

    /// Enable analyzer hints.
    pub hints: bool,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            entry_points: vec!["lib/".to_string()],
            fatal_warnings: true,
            hints: true,
        }
    }
}

/// Partial overlay for [`AnalyzeConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeOverlay {
    pub entry_points: Option<Vec<String>>,
    pub fatal_warnings: Option<bool>,
    pub hints: Option<bool>,
}

impl Layered for AnalyzeConfig {
    type Overlay = AnalyzeOverlay;

    fn merge(&self, overlay: &AnalyzeOverlay) -> Self {
        Self {
            entry_points: overlay
                .entry_points
                .clone()
                .unwrap_or_else(|| self.entry_points.clone()),
            fatal_warnings: overlay.fatal_warnings.unwrap_or(self.fatal_warnings),
            hints: overlay.hints.unwrap_or(self.hints),
        }
    }
}

/// Configuration for the `examples` task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplesConfig {
    /// Hostname the example server binds to.
    pub hostname: String,

    /// Port the example server binds to. Must be positive.
    pub port: u16,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            port: 8080,
        }
    }
}

/// Partial overlay for [`ExamplesConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExamplesOverlay {
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

impl Layered for ExamplesConfig {
    type Overlay = ExamplesOverlay;

    fn merge(&self, overlay: &ExamplesOverlay) -> Self {
        Self {
            hostname: overlay
                .hostname
                .clone()
                .unwrap_or_else(|| self.hostname.clone()),
            port: overlay.port.unwrap_or(self.port),
        }
    }
}

/// Configuration for the `format` task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Report formatting diffs without rewriting files. The formatter's
    /// exit code (1 on diff) is relayed verbatim.
    pub check: bool,

    /// Directories (or files) to format. Directories are expanded one
    /// level deep into the `.dart` files directly inside.
    pub directories: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            check: false,
            directories: vec!["lib/".to_string()],
        }
    }
}

/// Partial overlay for [`FormatConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatOverlay {
    pub check: Option<bool>,
    pub directories: Option<Vec<String>>,
}

impl Layered for FormatConfig {
    type Overlay = FormatOverlay;

    fn merge(&self, overlay: &FormatOverlay) -> Self {
        Self {
            check: overlay.check.unwrap_or(self.check),
            directories: overlay
                .directories
                .clone()
                .unwrap_or_else(|| self.directories.clone()),
        }
    }
}

/// Configuration for the `test` task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    /// Unit test paths passed to the test runner.
    pub unit_tests: Vec<String>,

    /// Integration test paths passed to the test runner.
    pub integration_tests: Vec<String>,

    /// Platforms the tests run on (`-p` flags).
    pub platforms: Vec<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            unit_tests: vec!["test/".to_string()],
            integration_tests: vec![],
            platforms: vec![],
        }
    }
}

/// Partial overlay for [`TestConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestOverlay {
    pub unit_tests: Option<Vec<String>>,
    pub integration_tests: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
}

impl Layered for TestConfig {
    type Overlay = TestOverlay;

    fn merge(&self, overlay: &TestOverlay) -> Self {
        Self {
            unit_tests: overlay
                .unit_tests
                .clone()
                .unwrap_or_else(|| self.unit_tests.clone()),
            integration_tests: overlay
                .integration_tests
                .clone()
                .unwrap_or_else(|| self.integration_tests.clone()),
            platforms: overlay
                .platforms
                .clone()
                .unwrap_or_else(|| self.platforms.clone()),
        }
    }
}
