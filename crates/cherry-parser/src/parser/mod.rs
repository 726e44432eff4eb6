//! The Cherry module parser.
//!
//! A single [`Parser`] owns the character cursor, the error-context
//! stack, and the commit flag that drives backtracking. The grammar is
//! split across the included files below, one concern per file, all
//! contributing methods to the same `impl` block family:
//!
//! - `helpers.rs` — backtracking (`attempt`), commit points, contexts
//! - `lexical.rs` — ignorables, names, keywords, symbols, numbers,
//!   strings
//! - `literals.rs` — the literal grammar shared with patterns
//! - `types.rs` — the type grammar
//! - `patterns.rs` — the pattern grammar
//! - `declarations.rs` — imports, declarations, and the module driver
//! - `expressions/` — prefix alternatives and the Pratt operator layer
//!
//! # Usage Example
//!
//! ```rust
//! use cherry_parser::Parser;
//!
//! let mut parser = Parser::new("Main", "let double = x => x * 2");
//! match parser.parse() {
//!     Ok(module) => println!("parsed: {}", module.to_sexp()),
//!     Err(e) => eprintln!("parse error: {}", e),
//! }
//! ```

use crate::cursor::Cursor;
use crate::keywords::{KEYWORDS, RESERVED_TYPE_NAMES};
use cherry_ast::{
    BinOp, DeclKind, Declaration, Expr, ExprKind, IdForm, Import, ImportSpecifier, Lit, MatchArm,
    Module, Pattern, TemplatePattern, TemplateSegment, Type, TypeDefBody,
};
use cherry_error::{ParseContext, ParseError, ParseErrorKind, ParseResult};
use cherry_span::{Position, Span};
use tracing::debug;

// Expressions, patterns, and types all nest through several entry
// points; the depth guard turns runaway nesting into a structured
// error instead of a stack overflow. The limit is conservative: each
// grammar level costs a few dozen native frames through the
// alternative chain, and real Cherry source rarely nests past 20-30
// levels.
const MAX_RECURSION_DEPTH: usize = 256;

/// Which expression grammar is active. Match guards use [`ExprMode::Guard`],
/// which excludes annotations and lambdas so the guard cannot swallow
/// the arm's `=>`. Delimited sub-constructs reset to [`ExprMode::Full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExprMode {
    Full,
    Guard,
}

/// Recursive-descent parser over a single source file.
///
/// The parser is a one-shot object: construct it with the module name
/// and source text, call [`Parser::parse`], and drop it. All state is
/// owned by the instance; nothing is shared or retained across parses.
pub struct Parser<'src> {
    /// Character cursor over the source text
    cursor: Cursor<'src>,
    /// Name the caller associates with this source file
    module_name: String,
    /// Enclosing constructs, outermost first; snapshotted into errors
    contexts: Vec<ParseContext>,
    /// Set by `commit()`; while true, failures propagate instead of
    /// rewinding to an earlier alternative
    committed: bool,
    /// Current nesting depth, bounded by `MAX_RECURSION_DEPTH`
    recursion_depth: usize,
}

impl<'src> Parser<'src> {
    /// Create a parser for one source file.
    pub fn new(module_name: impl Into<String>, source: &'src str) -> Self {
        Parser {
            cursor: Cursor::new(source),
            module_name: module_name.into(),
            contexts: Vec::new(),
            committed: false,
            recursion_depth: 0,
        }
    }

    /// Parse the whole source file into a [`Module`].
    ///
    /// Consumes input through to end-of-input; trailing garbage after
    /// the last declaration is an [`ParseErrorKind::ExpectingEof`]
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the single structured [`ParseError`] describing the
    /// deepest committed failure.
    pub fn parse(&mut self) -> ParseResult<Module> {
        match self.module() {
            Ok(module) => {
                debug!(
                    module = %module.name,
                    imports = module.imports.len(),
                    declarations = module.declarations.len(),
                    "parsed module"
                );
                Ok(module)
            }
            Err(err) => {
                debug!(module = %self.module_name, error = %err, "module parse failed");
                Err(err)
            }
        }
    }

    fn module(&mut self) -> ParseResult<Module> {
        self.ignorables();
        let mut imports = Vec::new();
        while let Some(import) = self.attempt(Self::import_clause)? {
            imports.push(import);
            self.ignorables();
        }
        let mut declarations = Vec::new();
        while let Some(declaration) = self.attempt(Self::declaration)? {
            declarations.push(declaration);
            self.ignorables();
        }
        self.ignorables();
        if !self.cursor.at_eof() {
            return Err(self.error_here(ParseErrorKind::ExpectingEof));
        }
        Ok(Module { name: self.module_name.clone(), imports, declarations })
    }
}

include!("helpers.rs");
include!("lexical.rs");
include!("literals.rs");
include!("types.rs");
include!("patterns.rs");
include!("declarations.rs");
include!("expressions/mod.rs");
include!("expressions/precedence.rs");
