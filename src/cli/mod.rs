//! CLI module for polycheck
//!
//! This module provides the command-line interface for the validator.
//!
//! ## Usage
//!
//! - `polycheck [FILE]` - Validate a program read from FILE, or from standard input when FILE is absent or `-`
//! - `polycheck --lex FILE` - Dump the token stream (debug)
//! - `polycheck --parse FILE` - Check syntax only (debug)
//!
//! ## Exit status
//!
//! - `0`: the program parsed; at most one report line was printed
//! - `1`: syntax error; `SYNTAX ERROR !&%!` was printed
//! - `2`: the input could not be read
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const SYNTAX_ERROR: ExitCode = ExitCode(1);
    pub const IO_ERROR: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create an input error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::IO_ERROR)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Syntax and semantic validator for polynomial programs
#[derive(Parser, Debug)]
#[command(name = "polycheck")]
#[command(version = VERSION)]
#[command(about = "Syntax and semantic validator for polynomial programs", long_about = None)]
pub struct Cli {
    /// Program to validate (reads standard input when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Render syntax errors with source context on standard error
    #[arg(long)]
    pub explain: bool,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only, without semantic checks (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with_all = ["file", "lex_file"])]
    pub parse_file: Option<PathBuf>,
}

/// Where program text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    Stdin,
    File(PathBuf),
}

impl SourceInput {
    /// Map an optional path argument to an input; `-` means standard input.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => SourceInput::File(path),
            _ => SourceInput::Stdin,
        }
    }

    /// Name used in error messages and rendered diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            SourceInput::Stdin => "<stdin>".to_string(),
            SourceInput::File(path) => path.display().to_string(),
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_source(&SourceInput::from_arg(Some(file)));
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_source(&SourceInput::from_arg(Some(file)), cli.explain);
    }

    commands::check_source(&SourceInput::from_arg(cli.file), cli.explain)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["polycheck", "program.poly"]).unwrap();
        assert_eq!(
            SourceInput::from_arg(cli.file),
            SourceInput::File(PathBuf::from("program.poly"))
        );
        assert!(!cli.explain);
    }

    #[test]
    fn test_cli_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["polycheck"]).unwrap();
        assert_eq!(SourceInput::from_arg(cli.file), SourceInput::Stdin);

        let cli = Cli::try_parse_from(["polycheck", "-"]).unwrap();
        assert_eq!(SourceInput::from_arg(cli.file), SourceInput::Stdin);
    }

    #[test]
    fn test_cli_parse_explain() {
        let cli = Cli::try_parse_from(["polycheck", "--explain", "program.poly"]).unwrap();
        assert!(cli.explain);
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["polycheck", "--lex", "program.poly"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["polycheck", "--parse", "program.poly"]).unwrap();
        assert!(cli.parse_file.is_some());
    }

    #[test]
    fn test_cli_debug_flags_conflict_with_file() {
        assert!(Cli::try_parse_from(["polycheck", "--lex", "a.poly", "b.poly"]).is_err());
        assert!(Cli::try_parse_from(["polycheck", "--lex", "a.poly", "--parse", "b.poly"]).is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(SourceInput::Stdin.display_name(), "<stdin>");
        assert_eq!(SourceInput::File(PathBuf::from("p.poly")).display_name(), "p.poly");
    }
}
