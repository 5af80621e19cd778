//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Diagnostics go to stderr so stdout carries only command output.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print remediation hint (cyan "hint:" prefix) to stderr
pub fn hint(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "hint".cyan(), msg);
}
