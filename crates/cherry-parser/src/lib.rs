//! Recursive-descent parser for the Cherry programming language.
//!
//! Given a module name and source text, the parser produces either a
//! [`Module`] — imports plus top-level declarations, with every
//! expression node carrying a source span — or a structured
//! [`ParseError`] naming what was expected, where, and inside which
//! constructs.
//!
//! The grammar is handled in four layers: character-level recognisers
//! (names, keywords, numbers, strings), the literal grammar shared by
//! expressions and patterns, the type grammar, and the Pratt-driven
//! expression grammar with the pattern and declaration parsers on top.
//! Ambiguous prefixes (`{` starts blocks and records, `(` starts
//! subexpressions and the unit literal, a bare name starts identifiers
//! and lambda parameter lists) are resolved by ordered alternatives
//! with explicit backtracking; each construct commits once its
//! identifying token has been consumed so errors point at the right
//! place.
//!
//! # Examples
//!
//! ```
//! let module = cherry_parser::parse_module("Main", "pub let x = 1")?;
//! assert_eq!(module.declarations.len(), 1);
//! # Ok::<(), cherry_parser::ParseError>(())
//! ```

mod cursor;
mod keywords;
mod parser;

pub use cherry_ast::Module;
pub use cherry_error::{ParseContext, ParseError, ParseErrorKind, ParseResult};
pub use parser::Parser;

/// Parse a whole source file into a [`Module`].
///
/// Convenience wrapper over [`Parser::new`] + [`Parser::parse`].
pub fn parse_module(module_name: &str, source: &str) -> ParseResult<Module> {
    Parser::new(module_name, source).parse()
}
