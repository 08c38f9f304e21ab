//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};

use miette::NamedSource;
use thiserror::Error;

use crate::frontend::diagnostics::{SYNTAX_ERROR_MESSAGE, SyntaxError};
use crate::frontend::report::Report;
use crate::frontend::{self, lexer, parser};

use super::{CliError, CliResult, ExitCode, SourceInput};

/// Largest accepted program, in bytes.
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Failure to obtain program text.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("'{name}' is too large (more than {max} bytes)", max = MAX_SOURCE_SIZE)]
    TooLarge { name: String },
}

impl From<ReadError> for CliError {
    fn from(err: ReadError) -> Self {
        CliError::io(err.to_string())
    }
}

/// Read the whole program from `input`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read, or is not valid UTF-8
/// - The input exceeds `MAX_SOURCE_SIZE` (16 MiB)
pub fn read_source(input: &SourceInput) -> Result<String, ReadError> {
    let name = input.display_name();
    let source = match input {
        SourceInput::File(path) => {
            let file = fs::File::open(path).map_err(|source| ReadError::Io {
                name: name.clone(),
                source,
            })?;
            read_bounded(file, &name)?
        }
        SourceInput::Stdin => read_bounded(io::stdin().lock(), &name)?,
    };
    tracing::debug!(input = %name, bytes = source.len(), "read program");
    Ok(source)
}

/// Read `reader` to the end, giving up after `MAX_SOURCE_SIZE` bytes.
///
/// The limit applies to the bytes actually read, not to any size reported up front.
fn read_bounded(reader: impl Read, name: &str) -> Result<String, ReadError> {
    let io_error = |source: io::Error| ReadError::Io {
        name: name.to_string(),
        source,
    };

    let mut bytes = Vec::new();
    reader
        .take(MAX_SOURCE_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(io_error)?;
    if bytes.len() as u64 > MAX_SOURCE_SIZE {
        return Err(ReadError::TooLarge { name: name.to_string() });
    }
    String::from_utf8(bytes).map_err(|err| io_error(io::Error::new(io::ErrorKind::InvalidData, err)))
}

/// Validate a program and print its report line.
pub fn check_source(input: &SourceInput, explain: bool) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    match frontend::validate(&source) {
        Ok(report) => {
            if !report.is_clean() {
                println!("{report}");
            }
            if explain {
                explain_report(&report);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(syntax_failure(input, source, err, explain)),
    }
}

/// Tokenize and display the token stream.
pub fn lex_source(input: &SourceInput) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    for token in lexer::lex(&source) {
        println!("{:>4}  {}", token.line, token);
    }
    Ok(ExitCode::SUCCESS)
}

/// Check syntax only.
pub fn parse_source(input: &SourceInput, explain: bool) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    match parser::check_syntax(&lexer::lex(&source)) {
        Ok(()) => {
            println!("OK");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(syntax_failure(input, source, err, explain)),
    }
}

/// Describe the reported error class on stderr.
fn explain_report(report: &Report) {
    if let Some(info) = report.info() {
        eprintln!("error code {}: {}", info.code, info.title);
        eprintln!("  {}", info.description);
    }
}

/// Print the fixed syntax error message, plus the rendered diagnostic when asked.
fn syntax_failure(input: &SourceInput, source: String, err: SyntaxError, explain: bool) -> ExitCode {
    tracing::debug!(input = %input.display_name(), %err, "syntax error");
    println!("{SYNTAX_ERROR_MESSAGE}");
    if explain {
        let report = miette::Report::new(err).with_source_code(NamedSource::new(input.display_name(), source));
        eprintln!("{report:?}");
    }
    ExitCode::SYNTAX_ERROR
}
