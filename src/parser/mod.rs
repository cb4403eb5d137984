//! Source parser.
//!
//! Workflow files are usually compiled CommonJS, sometimes hand-written ES
//! modules, occasionally TypeScript. Parsing tries script mode first (with
//! top-level `return` allowed) and falls back to module mode; either result
//! is accepted as long as the parser recovered.
//!
//! Recovery covers grammar errors only. An attempt is fatal when:
//! - the parser gave up
//! - the lexer met a character that cannot start a token
//! - errors left no statement behind
//!
//! Each parse owns its own arena. [`with_parsed_file`] keeps the tree scoped
//! to a closure so callers never juggle allocator lifetimes.

use crate::base::constants::TYPESCRIPT_EXTENSIONS;
use crate::error::AnalysisError;
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use std::path::Path;
use thiserror::Error;

/// Both parse attempts hit an unrecoverable syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Prefix of oxc's lexer diagnostic for bytes that cannot start a token.
const INVALID_CHARACTER: &str = "Invalid Character";

/// Result of one parse attempt, kept until both modes have been tried.
struct Attempt<'a> {
    program: Program<'a>,
    first_error: Option<String>,
    error_count: usize,
    fatal: bool,
}

impl Attempt<'_> {
    fn is_clean(&self) -> bool {
        !self.fatal && self.error_count == 0
    }
}

fn parse_attempt<'a>(allocator: &'a Allocator, source: &'a str, source_type: SourceType) -> Attempt<'a> {
    let options = ParseOptions {
        allow_return_outside_function: true,
        preserve_parens: false,
        ..ParseOptions::default()
    };
    let ret = Parser::new(allocator, source, source_type).with_options(options).parse();
    let messages: Vec<String> = ret.errors.iter().map(ToString::to_string).collect();
    let lexer_failed = messages.iter().any(|message| message.starts_with(INVALID_CHARACTER));
    let nothing_recovered = !messages.is_empty() && ret.program.body.is_empty();
    Attempt {
        fatal: ret.panicked || lexer_failed || nothing_recovered,
        first_error: messages.into_iter().next(),
        error_count: ret.errors.len(),
        program: ret.program,
    }
}

/// Parses `source` into a program allocated in `allocator`.
///
/// `path` only selects TypeScript syntax by extension; nothing is read.
pub fn parse_source<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    path: &Path,
) -> Result<Program<'a>, ParseError> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    let typescript = TYPESCRIPT_EXTENSIONS.contains(&extension);
    let jsx = extension == "tsx" || extension == "jsx";

    let script = parse_attempt(
        allocator,
        source,
        SourceType::cjs().with_typescript(typescript).with_jsx(jsx),
    );
    if script.is_clean() {
        return Ok(script.program);
    }

    let module = parse_attempt(
        allocator,
        source,
        SourceType::mjs().with_typescript(typescript).with_jsx(jsx),
    );
    if !module.fatal {
        if module.error_count > 0 {
            tracing::debug!(
                path = %path.display(),
                errors = module.error_count,
                "[PARSE] recovered from syntax errors in module mode"
            );
        }
        return Ok(module.program);
    }

    if !script.fatal {
        tracing::debug!(
            path = %path.display(),
            errors = script.error_count,
            "[PARSE] recovered from syntax errors in script mode"
        );
        return Ok(script.program);
    }

    let message = module
        .first_error
        .or(script.first_error)
        .unwrap_or_else(|| "unrecoverable syntax error".to_string());
    Err(ParseError::new(message))
}

/// Reads a file as UTF-8 text.
pub fn load_source(path: &Path) -> Result<String, AnalysisError> {
    std::fs::read_to_string(path).map_err(|err| AnalysisError::io(path, err))
}

/// Reads and parses `path`, then hands the program to `f`.
///
/// The allocator and source text live for the duration of the call only.
pub fn with_parsed_file<T>(
    path: &Path,
    f: impl FnOnce(&Program<'_>) -> T,
) -> Result<T, AnalysisError> {
    let source = load_source(path)?;
    let allocator = Allocator::default();
    let program = parse_source(&allocator, &source, path)
        .map_err(|err| AnalysisError::unparsable(path, err.message))?;
    Ok(f(&program))
}

/// Like [`with_parsed_file`] for collaborator files: failures are logged and
/// collapse to `None`.
pub fn with_collaborator_file<T>(path: &Path, f: impl FnOnce(&Program<'_>) -> T) -> Option<T> {
    match with_parsed_file(path, f) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(%err, "[RESOLVE] skipping collaborator file");
            None
        }
    }
}
