//! Line/column source positions and spans for the Cherry front end.
//!
//! The parser annotates every expression node with a [`Span`] so later
//! passes (diagnostics, type checking) can point back into the source.
//! Positions are 1-indexed line/column coordinates rather than byte
//! offsets: they never borrow from the source text, so the source buffer
//! can be dropped as soon as parsing completes.

mod span;

pub use span::{Position, Span};
