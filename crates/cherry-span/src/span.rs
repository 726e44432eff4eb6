//! Position and span types for source location tracking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-indexed line/column coordinate in a source file.
///
/// Ordering is line-major: a position on an earlier line compares less
/// than any position on a later line, and positions on the same line
/// compare by column.
///
/// # Example
///
/// ```
/// use cherry_span::Position;
///
/// let a = Position::new(1, 5);
/// let b = Position::new(2, 1);
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position at the start of input.
    #[inline]
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A region of source text, from `start` (inclusive) to `end` (the
/// position immediately after the last covered character).
///
/// # Invariants
///
/// - `start <= end` (enforced by [`Span::new`] in debug builds)
/// - Spans carry only integer coordinates, never slices of the source
///
/// # Example
///
/// ```
/// use cherry_span::{Position, Span};
///
/// let outer = Span::new(Position::new(1, 1), Position::new(3, 1));
/// let inner = Span::new(Position::new(1, 4), Position::new(2, 7));
/// assert!(outer.covers(inner));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// First covered position (inclusive)
    pub start: Position,
    /// Position immediately after the last covered character
    pub end: Position,
}

impl Span {
    /// Creates a new span with the given endpoints.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `start > end`.
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "Span: start ({start}) > end ({end})");
        Self { start, end }
    }

    /// Creates an empty span at the given position.
    #[inline]
    pub const fn point(pos: Position) -> Self {
        Self { start: pos, end: pos }
    }

    /// Returns true if this span is empty (start == end).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span covers the given span entirely.
    #[inline]
    pub fn covers(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns a new span that covers both this span and the given span.
    #[inline]
    pub fn union(&self, other: Span) -> Span {
        Span { start: self.start.min(other.start), end: self.end.max(other.end) }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<(Position, Position)> for Span {
    #[inline]
    fn from((start, end): (Position, Position)) -> Self {
        Self::new(start, end)
    }
}

impl From<Span> for (Position, Position) {
    #[inline]
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}
