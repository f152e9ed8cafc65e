//! dart_dev - developer task orchestration for Dart projects
//!
//! A thin layer over the Dart command-line tools (static analyzer, source
//! formatter, test runner, example server). It reads `tool/dev.toml`, merges
//! it with CLI flags, builds the right tool invocation, runs it as a
//! subprocess, and relays the exit status.
//!
//! The task handlers in [`tasks`] double as the programmatic API: each takes
//! a plain configuration value (use `Default::default()` for the documented
//! defaults) and returns the underlying tool's exit code.

pub mod cli;
pub mod config;
pub mod tasks;

pub use config::{AnalyzeConfig, ExamplesConfig, FormatConfig, TestConfig};
