//! Error types for YAML parsing and emitting.

use thiserror::Error;
use yaml_stream_events::Mark;

/// Result type alias for yaml-stream operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a caller-supplied event or chunk handler.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which stage of the engine rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The raw input could not be decoded (e.g. a control character).
    Reader,
    /// The input could not be split into tokens.
    Scanner,
    /// The tokens do not form a valid YAML structure.
    Parser,
}

/// A structured, position-annotated parse failure.
///
/// Reader errors carry `byte_offset`/`byte_value`; scanner and parser errors
/// carry `problem_mark` and, when the engine knows which construct it was
/// inside, `context_mark`/`context_detail`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,

    /// Human-readable summary, e.g.
    /// `did not find expected key, while parsing a block mapping, on line 2`.
    pub message: String,

    pub problem_mark: Option<Mark>,
    pub problem_detail: Option<String>,

    pub context_mark: Option<Mark>,
    pub context_detail: Option<String>,

    /// Offset in bytes of the undecodable character. Like the marks, it
    /// does not count a leading byte-order mark.
    pub byte_offset: Option<usize>,
    /// The undecodable character's code point.
    pub byte_value: Option<u32>,
}

impl ParseError {
    pub fn reader(problem: impl Into<String>, byte_offset: usize, byte_value: u32) -> Self {
        let problem = problem.into();
        Self {
            kind: ParseErrorKind::Reader,
            message: format!("{problem} (#x{byte_value:X} at byte {byte_offset})"),
            problem_mark: None,
            problem_detail: Some(problem),
            context_mark: None,
            context_detail: None,
            byte_offset: Some(byte_offset),
            byte_value: Some(byte_value),
        }
    }

    /// A scanner or parser error at `problem_mark`, optionally inside the
    /// construct described by `context`.
    pub fn syntax(
        kind: ParseErrorKind,
        problem: impl Into<String>,
        problem_mark: Mark,
        context: Option<(String, Mark)>,
    ) -> Self {
        let problem = problem.into();
        let message = match &context {
            Some((context, _)) => {
                format!("{problem}, {context}, on line {}", problem_mark.line + 1)
            }
            None => format!("{problem}, on line {}", problem_mark.line + 1),
        };
        let (context_detail, context_mark) = context.unzip();

        Self {
            kind,
            message,
            problem_mark: Some(problem_mark),
            problem_detail: Some(problem),
            context_mark,
            context_detail,
            byte_offset: None,
            byte_value: None,
        }
    }
}

/// The emitter engine rejected an event or failed to write its output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EmitError {
    pub message: String,
}

impl EmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur while parsing, emitting, or loading YAML.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    /// An event or chunk handler asked to stop.
    #[error("event handler failed: {0}")]
    Handler(#[source] BoxError),

    /// The event stream does not describe a tree the loader can build.
    #[error("{message} at {mark}")]
    Load { message: String, mark: Mark },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}
