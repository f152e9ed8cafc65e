//! Configuration model, loading, and resolution
//!
//! Each task has a typed configuration with documented defaults and an
//! overlay twin holding only explicitly-set fields. Overlays come from two
//! places: the project's `tool/dev.toml` and the CLI flags of the invoked
//! task. Resolution layers them per field, lowest to highest precedence:
//! built-in defaults, file, CLI.

mod loader;
mod model;
mod resolve;

pub use loader::{load, ConfigError, FileOverlay, CONFIG_PATH};
pub use model::{
    AnalyzeConfig, AnalyzeOverlay, ExamplesConfig, ExamplesOverlay, FormatConfig, FormatOverlay,
    Layered, TestConfig, TestOverlay,
};
pub use resolve::resolve;
