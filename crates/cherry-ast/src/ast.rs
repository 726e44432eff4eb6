//! Node types for parsed Cherry modules.
//!
//! The shapes here mirror the surface grammar: a [`Module`] is a list of
//! imports and declarations, declarations carry spanned expression
//! bodies, and expressions, patterns, and types are three separate
//! grammars that share the literal forms.
//!
//! "Mapping" collections (record fields, enum variant tables, record
//! destructure entries) are `Vec<(String, …)>` preserving source order.
//! Duplicate keys are not rejected here; semantic passes own that.

use cherry_span::Span;

/// A parsed source file: the module name handed to the parser plus the
/// imports and declarations found in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Name the caller associated with this source file
    pub name: String,
    /// Import clauses, in source order
    pub imports: Vec<Import>,
    /// Top-level declarations, in source order
    pub declarations: Vec<Declaration>,
}

/// A single `import` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    /// Where the imported module comes from
    pub specifier: ImportSpecifier,
    /// Dotted upper-case path from the `as` clause; empty when absent
    pub alias: Vec<String>,
    /// Lower-case names from the `exposing { … }` clause; empty when absent
    pub exposing: Vec<String>,
}

/// The source of an import: a host binding (`ext "…"`), a package
/// (`pkg "…"`), or a project-local path (`"…"`).
///
/// The payload is the raw string between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    External(String),
    Package(String),
    Local(String),
}

/// A top-level declaration with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub span: Span,
}

impl Declaration {
    /// Create a new declaration node.
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Declaration { kind, span }
    }
}

/// The four declaration forms.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    /// `run expr` — evaluated for effect when the module loads
    Run(Expr),
    /// `[pub] ext name [: type]` — a host-provided value
    Ext { public: bool, name: String, signature: Type },
    /// `[pub] let name [: type] = expr`
    ///
    /// `signature` is [`Type::Any`] when no annotation was written.
    Let { public: bool, name: String, signature: Type, body: Expr },
    /// `[pub] type Name [tvars] [= body]`
    Type { public: bool, name: String, type_vars: Vec<String>, body: TypeDefBody },
}

/// The body of a `type` declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefBody {
    /// `= #tag params | #tag params | …`
    Enum(Vec<(String, Vec<Type>)>),
    /// `= { field: type, … }`
    Record(Vec<(String, Type)>),
    /// No body: an opaque type
    Abstract,
}

/// A spanned expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    /// Create a new expression node.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Build an infix node, recomputing the span from the operand spans.
    ///
    /// The span of an infix expression is always
    /// `(lhs.span.start, rhs.span.end)`; routing every operator through
    /// this helper keeps that rule in one place.
    pub fn infix(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        let span = Span::new(lhs.span.start, rhs.span.end);
        Expr::new(ExprKind::Infix { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }, span)
    }
}

/// Expression forms.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `target.field.field…` — the field chain is non-empty
    Access { target: Box<Expr>, fields: Vec<String> },
    /// `callee arg arg…` — the argument list is non-empty
    Application { callee: Box<Expr>, args: Vec<Expr> },
    /// `expr as type`
    Annotation { target: Box<Expr>, signature: Type },
    /// `{ bindings… ret expr }`
    ///
    /// A `run expr` binding is stored under the name `"_"`.
    Block { bindings: Vec<(String, Expr)>, ret: Box<Expr> },
    /// `if test then consequent else alternative`
    Conditional { test: Box<Expr>, consequent: Box<Expr>, alternative: Box<Expr> },
    Identifier(IdForm),
    /// A binary operator application; always built via [`Expr::infix`]
    Infix { op: BinOp, lhs: Box<Expr>, rhs: Box<Expr> },
    /// `pattern pattern… => body` — the parameter list is non-empty
    Lambda { params: Vec<Pattern>, body: Box<Expr> },
    Literal(Lit),
    /// `where scrutinee is pat [if guard] => body …`
    Match { scrutinee: Box<Expr>, arms: Vec<MatchArm> },
}

/// The shape of an identifier expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdForm {
    /// A bare lower-case name
    Local(String),
    /// `Module.Path.name` — one or more upper-case segments, then an inner form
    Scoped { modules: Vec<String>, inner: Box<IdForm> },
    /// `_` or `_name`
    Placeholder(Option<String>),
}

/// One `is pattern [if guard] => body` arm of a match expression.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    pub body: Expr,
}

/// Infix operators, from loosest (`|>`) to tightest (`>>`) binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Pipe,
    Compose,
    Eq,
    NotEq,
    Lte,
    Lt,
    Gte,
    Gt,
    And,
    Or,
    Cons,
    Join,
    Add,
    Sub,
    Mul,
    Pow,
    Mod,
}

impl BinOp {
    /// Lower-case name used in S-expression output.
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Pipe => "pipe",
            BinOp::Compose => "compose",
            BinOp::Eq => "eq",
            BinOp::NotEq => "not-eq",
            BinOp::Lte => "lte",
            BinOp::Lt => "lt",
            BinOp::Gte => "gte",
            BinOp::Gt => "gt",
            BinOp::And => "and",
            BinOp::Or => "or",
            BinOp::Cons => "cons",
            BinOp::Join => "join",
            BinOp::Add => "add",
            BinOp::Sub => "sub",
            BinOp::Mul => "mul",
            BinOp::Pow => "pow",
            BinOp::Mod => "mod",
        }
    }
}

/// Literal forms, shared between expressions and (a restricted subset
/// of) patterns.
#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    /// `[a, b, c]`
    Array(Vec<Expr>),
    /// `true` / `false`
    Boolean(bool),
    /// Integer, hex, octal, binary, or decimal — always a double
    Number(f64),
    /// `{ field: expr, … }` with `{ foo }` shorthand for `{ foo: foo }`
    Record(Vec<(String, Expr)>),
    /// `"…"`
    String(String),
    /// `` `…${expr}…` `` — alternating text and expression segments
    Template(Vec<TemplateSegment>),
    /// `()`
    Undefined,
    /// `#tag arg arg…`
    Variant { tag: String, args: Vec<Expr> },
}

/// One segment of a template literal. Adjacent text runs are coalesced
/// by the parser, so two `Text` segments never sit next to each other.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSegment {
    Text(String),
    Expr(Expr),
}

/// Pattern forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// `[p, p, ...rest]` — an optional final [`Pattern::Spread`] element
    ArrayDestructure(Vec<Pattern>),
    /// Restricted to `Boolean`, `Number`, `String`, and `Undefined`
    Literal(Lit),
    /// A bare lower-case binding
    Name(String),
    /// `{ key, key: pattern, ...rest }`
    ///
    /// `{ key }` shorthand stores `(key, None)`; a final `...name`
    /// spread stores `(name, Some(Pattern::Spread(name)))`.
    RecordDestructure(Vec<(String, Option<Pattern>)>),
    /// `...name` — collects the rest of an array or record
    Spread(String),
    /// `` `…${pattern}…` ``
    TemplateDestructure(Vec<TemplatePattern>),
    /// `@TypeName pattern`
    Typeof { name: String, pattern: Box<Pattern> },
    /// `#tag pattern…`
    VariantDestructure { tag: String, args: Vec<Pattern> },
    /// `_` or `_name`
    Wildcard(Option<String>),
}

/// One segment of a template destructure pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePattern {
    Text(String),
    Pattern(Pattern),
}

/// Type forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A lower-case type variable
    Var(String),
    /// An upper-case constructor, or the unit type `()`
    Con(String),
    /// `head arg arg…` — the argument list is non-empty
    App { head: Box<Type>, args: Vec<Type> },
    /// `from -> to`, right-associative in source
    Fun { from: Box<Type>, to: Box<Type> },
    /// `{ field: type, … }`
    Record(Vec<(String, Type)>),
    /// `#tag params #tag params …`
    Sum(Vec<(String, Vec<Type>)>),
    /// `?` — to be solved by inference
    Hole,
    /// `*` — the unconstrained type
    Any,
}
