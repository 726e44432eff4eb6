//! Abstract syntax tree definitions for the Cherry language.
//!
//! This crate defines the module, declaration, expression, pattern, and
//! type nodes produced by the parser. Nodes are plain immutable data:
//! the parser creates them, and later passes (name resolution, type
//! checking) only read them.
//!
//! Every expression and declaration carries a [`Span`] locating it in
//! the source. Patterns and types are structural and unspanned.
//!
//! For debugging and structural test assertions, every node can render
//! itself as a compact S-expression via `to_sexp()`:
//!
//! ```
//! use cherry_ast::{BinOp, Expr, ExprKind, IdForm};
//! use cherry_span::{Position, Span};
//!
//! let span = Span::new(Position::new(1, 1), Position::new(1, 2));
//! let a = Expr::new(ExprKind::Identifier(IdForm::Local("a".into())), span);
//! let b = Expr::new(ExprKind::Identifier(IdForm::Local("b".into())), span);
//! assert_eq!(Expr::infix(BinOp::Add, a, b).to_sexp(), r#"(add (local "a") (local "b"))"#);
//! ```

mod ast;
mod sexp;

pub use ast::{
    BinOp, DeclKind, Declaration, Expr, ExprKind, IdForm, Import, ImportSpecifier, Lit, MatchArm,
    Module, Pattern, TemplatePattern, TemplateSegment, Type, TypeDefBody,
};
pub use cherry_span::{Position, Span};
