//! dart_dev CLI - developer task orchestration for Dart projects

use std::process::ExitCode;

fn main() -> ExitCode {
    dart_dev::cli::run()
}
