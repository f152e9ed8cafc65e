//! Output formatting for CLI commands

use console::style;

/// Output helper for consistent formatting
pub struct Output {
    color: bool,
    quiet: bool,
}

impl Output {
    pub fn new(color: bool, quiet: bool) -> Self {
        Self { color, quiet }
    }

    /// Prints a success message (suppressed by --quiet)
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            println!("{}", style(message).green());
        } else {
            println!("{}", message);
        }
    }

    /// Prints an informational message (suppressed by --quiet)
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Prints an error message; never suppressed
    pub fn error(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", style("Error:").red().bold(), message);
        } else {
            eprintln!("Error: {}", message);
        }
    }

    /// Returns true if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
