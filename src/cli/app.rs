//! Main CLI application structure

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use super::output::Output;
use crate::config::{
    self, AnalyzeConfig, AnalyzeOverlay, ConfigError, ExamplesConfig, ExamplesOverlay,
    FormatConfig, FormatOverlay, TestConfig, TestOverlay,
};
use crate::tasks::{self, TaskError};

/// Dedicated exit codes, sysexits-style, so callers can tell "my setup is
/// wrong" from "the underlying check failed". Tool exit codes are relayed
/// verbatim and never remapped onto these.
pub mod exit {
    /// Bad CLI input: unknown task, unknown flag, invalid value.
    pub const USAGE: u8 = 64;
    /// The external tool could not be launched.
    pub const UNAVAILABLE: u8 = 69;
    /// `init` refused to overwrite an existing configuration file.
    pub const CANT_CREATE: u8 = 73;
    /// `tool/dev.toml` is present but malformed or ill-typed.
    pub const CONFIG: u8 = 78;
}

#[derive(Parser)]
#[command(name = "dart_dev")]
#[command(version, about = "Developer task orchestration for Dart projects")]
pub struct Cli {
    /// Colorize output (default: on)
    #[arg(long, global = true, overrides_with = "no_color")]
    pub color: bool,

    /// Disable colorized output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Minimize logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    fn color(&self) -> bool {
        !self.no_color
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run static analysis over the project's entry points
    Analyze {
        /// Entry point file or directory (repeatable; replaces the
        /// configured list)
        #[arg(long = "entry-point", value_name = "PATH")]
        entry_points: Vec<String>,

        /// Treat analyzer warnings as fatal
        #[arg(long, overrides_with = "no_fatal_warnings")]
        fatal_warnings: bool,

        /// Do not treat analyzer warnings as fatal
        #[arg(long)]
        no_fatal_warnings: bool,

        /// Enable analyzer hints
        #[arg(long, overrides_with = "no_hints")]
        hints: bool,

        /// Disable analyzer hints
        #[arg(long)]
        no_hints: bool,
    },

    /// Serve the example/ directory until interrupted
    Examples {
        /// Hostname to bind
        #[arg(long)]
        hostname: Option<String>,

        /// Port to bind
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,
    },

    /// Format source files in place, or check formatting
    Format {
        /// Report formatting diffs without rewriting files (exit 1 on diff)
        #[arg(long, overrides_with = "no_check")]
        check: bool,

        /// Rewrite files in place even if the project config enables check
        #[arg(long)]
        no_check: bool,

        /// Directory or file to format (repeatable; replaces the
        /// configured list)
        #[arg(long = "directory", value_name = "PATH")]
        directories: Vec<String>,
    },

    /// Write a tool/dev.toml configuration template
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Run unit and integration tests
    Test {
        /// Unit test path (repeatable; replaces the configured list)
        #[arg(long = "unit", value_name = "PATH")]
        unit_tests: Vec<String>,

        /// Integration test path (repeatable; replaces the configured list)
        #[arg(long = "integration", value_name = "PATH")]
        integration_tests: Vec<String>,

        /// Platform to run tests on (repeatable)
        #[arg(short, long = "platform", value_name = "NAME")]
        platforms: Vec<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return finish_parse(err),
    };

    let output = Output::new(cli.color(), cli.quiet);

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(err) => {
            output.error(&format!("Cannot determine working directory: {}", err));
            return ExitCode::FAILURE;
        }
    };

    match execute(&cli, &root, &output) {
        Ok(code) => ExitCode::from(code.clamp(0, u8::MAX as i32) as u8),
        Err(err) => report(&err, &output),
    }
}

/// Help and version short-circuit with exit 0; everything else is a usage
/// error reported with the dedicated code, before any task runs.
fn finish_parse(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(exit::USAGE),
    }
}

fn execute(cli: &Cli, root: &Path, output: &Output) -> Result<i32> {
    match &cli.command {
        Commands::Init { force } => {
            tasks::init::run(root, *force)?;
            output.success(&format!("Wrote {}", config::CONFIG_PATH));
            Ok(0)
        }

        Commands::Analyze {
            entry_points,
            fatal_warnings,
            no_fatal_warnings,
            hints,
            no_hints,
        } => {
            let file = config::load(root)?;
            let overlay = AnalyzeOverlay {
                entry_points: list(entry_points),
                fatal_warnings: flag_pair(*fatal_warnings, *no_fatal_warnings),
                hints: flag_pair(*hints, *no_hints),
            };
            let resolved: AnalyzeConfig = config::resolve(&file.analyze, &overlay);

            output.info("Running dartanalyzer...");
            tasks::analyze::run(root, &resolved)
        }

        Commands::Examples { hostname, port } => {
            let file = config::load(root)?;
            let overlay = ExamplesOverlay {
                hostname: hostname.clone(),
                port: *port,
            };
            let resolved: ExamplesConfig = config::resolve(&file.examples, &overlay);

            output.info(&format!(
                "Serving examples at http://{}:{} (Ctrl+C to stop)...",
                resolved.hostname, resolved.port
            ));
            tasks::examples::run(root, &resolved)
        }

        Commands::Format {
            check,
            no_check,
            directories,
        } => {
            let file = config::load(root)?;
            let overlay = FormatOverlay {
                check: flag_pair(*check, *no_check),
                directories: list(directories),
            };
            let resolved: FormatConfig = config::resolve(&file.format, &overlay);

            output.info("Running dartfmt...");
            tasks::format::run(root, &resolved)
        }

        Commands::Test {
            unit_tests,
            integration_tests,
            platforms,
        } => {
            let file = config::load(root)?;
            let overlay = TestOverlay {
                unit_tests: list(unit_tests),
                integration_tests: list(integration_tests),
                platforms: list(platforms),
            };
            let resolved: TestConfig = config::resolve(&file.test, &overlay);

            output.info("Running pub run test...");
            tasks::test::run(root, &resolved)
        }
    }
}

fn report(err: &anyhow::Error, output: &Output) -> ExitCode {
    output.error(&format!("{:#}", err));

    if err.downcast_ref::<ConfigError>().is_some() {
        return ExitCode::from(exit::CONFIG);
    }

    match err.downcast_ref::<TaskError>() {
        Some(TaskError::FileExists { .. }) => ExitCode::from(exit::CANT_CREATE),
        Some(TaskError::Launch { .. }) => ExitCode::from(exit::UNAVAILABLE),
        None => ExitCode::FAILURE,
    }
}

/// An untouched repeatable flag means "not set"; any values replace the
/// configured list wholesale.
fn list(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
