//! Error types for the Cherry front-end parser.
//!
//! Every parse failure is a single structured [`ParseError`]: what the
//! parser was looking for ([`ParseErrorKind`]), where it was looking
//! ([`Position`]), and which constructs it was inside at the time (the
//! [`ParseContext`] stack, innermost last).
//!
//! Rendering a diagnostic out of these values (source excerpts, carets,
//! suggestions) belongs to downstream tooling; this crate only owns the
//! data and its `Display` form.
//!
//! # Examples
//!
//! ```
//! use cherry_error::{ParseContext, ParseError, ParseErrorKind};
//! use cherry_span::Position;
//!
//! let err = ParseError::new(
//!     ParseErrorKind::ExpectingSymbol("=".to_string()),
//!     Position::new(3, 7),
//!     vec![ParseContext::InDeclaration],
//! );
//! assert_eq!(err.to_string(), "expecting symbol \"=\" at 3:7 (in declaration)");
//! ```

use cherry_span::Position;
use std::fmt;
use thiserror::Error;

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// What the parser expected (or stumbled over) at the failure position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A literal symbol such as `=`, `{`, or `=>` was required
    #[error("expecting symbol {0:?}")]
    ExpectingSymbol(String),

    /// A reserved word such as `let` or `then` was required
    #[error("expecting keyword {0:?}")]
    ExpectingKeyword(String),

    /// An infix operator token was required
    #[error("expecting operator {0:?}")]
    ExpectingOperator(String),

    /// A lower-case name was required; also raised when a reserved word
    /// appears where a name belongs
    #[error("expecting a camelCase name")]
    ExpectingCamelCase,

    /// An upper-case name was required; also raised when a reserved type
    /// constructor is re-declared
    #[error("expecting a CapitalCase name")]
    ExpectingCapitalCase,

    /// A numeric literal was required
    #[error("expecting a number")]
    ExpectingNumber,

    /// A character was required, typically inside a string or template
    #[error("expecting a character")]
    ExpectingChar,

    /// A type was required and none of the type forms matched
    #[error("expecting a type")]
    ExpectingType,

    /// Input remained after the last declaration
    #[error("expecting end of input")]
    ExpectingEof,

    /// A character that cannot appear here, e.g. a letter dangling off
    /// the end of a number
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    /// A bug in the parser itself, never user error
    #[error("internal parser error: {0}")]
    Internal(String),
}

/// The construct the parser was inside when a failure was detected.
/// Errors carry a stack of these, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseContext {
    InImport,
    InDeclaration,
    InExpr,
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseContext::InImport => write!(f, "in import"),
            ParseContext::InDeclaration => write!(f, "in declaration"),
            ParseContext::InExpr => write!(f, "in expression"),
        }
    }
}

fn format_contexts(contexts: &[ParseContext]) -> String {
    if contexts.is_empty() {
        return String::new();
    }
    let list = contexts.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    format!(" ({list})")
}

/// A structured parse failure.
///
/// The position is where the failure was detected, and the context
/// stack names the enclosing constructs the parser had committed to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {position}{}", format_contexts(.contexts))]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// Line/column at which the failure was detected
    pub position: Position,
    /// Enclosing constructs, outermost first
    pub contexts: Vec<ParseContext>,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, position: Position, contexts: Vec<ParseContext>) -> Self {
        ParseError { kind, position, contexts }
    }

    /// The position at which the failure was detected.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The innermost context the parser had committed to, if any.
    pub fn innermost_context(&self) -> Option<ParseContext> {
        self.contexts.last().copied()
    }
}
