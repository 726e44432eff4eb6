//! Compact S-expression rendering for AST nodes.
//!
//! The output is meant for debugging and structural test assertions: it
//! includes every semantically relevant field and no spans, so two
//! parses of equivalent source (for example with different whitespace)
//! render identically.

use crate::ast::{
    DeclKind, Declaration, Expr, ExprKind, IdForm, Import, ImportSpecifier, Lit, Module, Pattern,
    TemplatePattern, TemplateSegment, Type, TypeDefBody,
};
use std::fmt::Write as _;

fn join<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    items.iter().map(render).collect::<Vec<_>>().join(" ")
}

impl Module {
    /// Render the whole module as `(module "name" imports… declarations…)`.
    pub fn to_sexp(&self) -> String {
        let mut out = format!("(module {:?}", self.name);
        for import in &self.imports {
            let _ = write!(out, " {}", import.to_sexp());
        }
        for decl in &self.declarations {
            let _ = write!(out, " {}", decl.to_sexp());
        }
        out.push(')');
        out
    }
}

impl Import {
    pub fn to_sexp(&self) -> String {
        let mut out = format!("(import {}", self.specifier.to_sexp());
        if !self.alias.is_empty() {
            let _ = write!(out, " (as {})", join(&self.alias, |m| format!("{m:?}")));
        }
        if !self.exposing.is_empty() {
            let _ = write!(out, " (exposing {})", join(&self.exposing, |n| format!("{n:?}")));
        }
        out.push(')');
        out
    }
}

impl ImportSpecifier {
    pub fn to_sexp(&self) -> String {
        match self {
            ImportSpecifier::External(path) => format!("(external {path:?})"),
            ImportSpecifier::Package(path) => format!("(package {path:?})"),
            ImportSpecifier::Local(path) => format!("(local {path:?})"),
        }
    }
}

impl Declaration {
    pub fn to_sexp(&self) -> String {
        match &self.kind {
            DeclKind::Run(body) => format!("(run {})", body.to_sexp()),
            DeclKind::Ext { public, name, signature } => {
                let vis = if *public { "pub " } else { "" };
                format!("(ext {vis}{name:?} {})", signature.to_sexp())
            }
            DeclKind::Let { public, name, signature, body } => {
                let vis = if *public { "pub " } else { "" };
                format!("(let {vis}{name:?} {} {})", signature.to_sexp(), body.to_sexp())
            }
            DeclKind::Type { public, name, type_vars, body } => {
                let vis = if *public { "pub " } else { "" };
                let vars = if type_vars.is_empty() {
                    "(vars)".to_string()
                } else {
                    format!("(vars {})", join(type_vars, |v| format!("{v:?}")))
                };
                format!("(type {vis}{name:?} {vars} {})", body.to_sexp())
            }
        }
    }
}

impl TypeDefBody {
    pub fn to_sexp(&self) -> String {
        match self {
            TypeDefBody::Enum(variants) => {
                let body = join(variants, |(tag, params)| {
                    if params.is_empty() {
                        format!("(variant {tag:?})")
                    } else {
                        format!("(variant {tag:?} {})", join(params, Type::to_sexp))
                    }
                });
                format!("(enum {body})")
            }
            TypeDefBody::Record(fields) => {
                let body =
                    join(fields, |(name, ty)| format!("(field {name:?} {})", ty.to_sexp()));
                format!("(record {body})")
            }
            TypeDefBody::Abstract => "abstract".to_string(),
        }
    }
}

impl Expr {
    pub fn to_sexp(&self) -> String {
        match &self.kind {
            ExprKind::Access { target, fields } => {
                format!("(access {} {})", target.to_sexp(), join(fields, |f| format!("{f:?}")))
            }
            ExprKind::Application { callee, args } => {
                format!("(apply {} {})", callee.to_sexp(), join(args, Expr::to_sexp))
            }
            ExprKind::Annotation { target, signature } => {
                format!("(annotation {} {})", target.to_sexp(), signature.to_sexp())
            }
            ExprKind::Block { bindings, ret } => {
                let mut out = String::from("(block");
                for (name, value) in bindings {
                    let _ = write!(out, " (bind {name:?} {})", value.to_sexp());
                }
                let _ = write!(out, " (ret {}))", ret.to_sexp());
                out
            }
            ExprKind::Conditional { test, consequent, alternative } => format!(
                "(if {} {} {})",
                test.to_sexp(),
                consequent.to_sexp(),
                alternative.to_sexp()
            ),
            ExprKind::Identifier(id) => id.to_sexp(),
            ExprKind::Infix { op, lhs, rhs } => {
                format!("({} {} {})", op.name(), lhs.to_sexp(), rhs.to_sexp())
            }
            ExprKind::Lambda { params, body } => {
                format!("(lambda (params {}) {})", join(params, Pattern::to_sexp), body.to_sexp())
            }
            ExprKind::Literal(lit) => lit.to_sexp(),
            ExprKind::Match { scrutinee, arms } => {
                let mut out = format!("(where {}", scrutinee.to_sexp());
                for arm in arms {
                    match &arm.guard {
                        Some(guard) => {
                            let _ = write!(
                                out,
                                " (case {} (guard {}) {})",
                                arm.pattern.to_sexp(),
                                guard.to_sexp(),
                                arm.body.to_sexp()
                            );
                        }
                        None => {
                            let _ = write!(
                                out,
                                " (case {} {})",
                                arm.pattern.to_sexp(),
                                arm.body.to_sexp()
                            );
                        }
                    }
                }
                out.push(')');
                out
            }
        }
    }
}

impl IdForm {
    pub fn to_sexp(&self) -> String {
        match self {
            IdForm::Local(name) => format!("(local {name:?})"),
            IdForm::Scoped { modules, inner } => {
                format!("(scoped {} {})", join(modules, |m| format!("{m:?}")), inner.to_sexp())
            }
            IdForm::Placeholder(None) => "(placeholder)".to_string(),
            IdForm::Placeholder(Some(name)) => format!("(placeholder {name:?})"),
        }
    }
}

impl Lit {
    pub fn to_sexp(&self) -> String {
        match self {
            Lit::Array(items) => {
                if items.is_empty() {
                    "(array)".to_string()
                } else {
                    format!("(array {})", join(items, Expr::to_sexp))
                }
            }
            Lit::Boolean(value) => value.to_string(),
            Lit::Number(value) => format!("(number {value})"),
            Lit::Record(fields) => {
                let body =
                    join(fields, |(name, value)| format!("(field {name:?} {})", value.to_sexp()));
                format!("(record {body})")
            }
            Lit::String(value) => format!("(string {value:?})"),
            Lit::Template(segments) => {
                let body = join(segments, |segment| match segment {
                    TemplateSegment::Text(text) => format!("(text {text:?})"),
                    TemplateSegment::Expr(expr) => expr.to_sexp(),
                });
                format!("(template {body})")
            }
            Lit::Undefined => "(undefined)".to_string(),
            Lit::Variant { tag, args } => {
                if args.is_empty() {
                    format!("(variant {tag:?})")
                } else {
                    format!("(variant {tag:?} {})", join(args, Expr::to_sexp))
                }
            }
        }
    }
}

impl Pattern {
    pub fn to_sexp(&self) -> String {
        match self {
            Pattern::ArrayDestructure(items) => {
                if items.is_empty() {
                    "(array-destructure)".to_string()
                } else {
                    format!("(array-destructure {})", join(items, Pattern::to_sexp))
                }
            }
            Pattern::Literal(lit) => lit.to_sexp(),
            Pattern::Name(name) => format!("(name {name:?})"),
            Pattern::RecordDestructure(entries) => {
                let body = join(entries, |(name, pattern)| match pattern {
                    Some(pattern) => format!("(field {name:?} {})", pattern.to_sexp()),
                    None => format!("(field {name:?})"),
                });
                format!("(record-destructure {body})")
            }
            Pattern::Spread(name) => format!("(spread {name:?})"),
            Pattern::TemplateDestructure(segments) => {
                let body = join(segments, |segment| match segment {
                    TemplatePattern::Text(text) => format!("(text {text:?})"),
                    TemplatePattern::Pattern(pattern) => pattern.to_sexp(),
                });
                format!("(template-destructure {body})")
            }
            Pattern::Typeof { name, pattern } => {
                format!("(typeof {name:?} {})", pattern.to_sexp())
            }
            Pattern::VariantDestructure { tag, args } => {
                if args.is_empty() {
                    format!("(variant-destructure {tag:?})")
                } else {
                    format!("(variant-destructure {tag:?} {})", join(args, Pattern::to_sexp))
                }
            }
            Pattern::Wildcard(None) => "(wildcard)".to_string(),
            Pattern::Wildcard(Some(name)) => format!("(wildcard {name:?})"),
        }
    }
}

impl Type {
    pub fn to_sexp(&self) -> String {
        match self {
            Type::Var(name) => format!("(var {name:?})"),
            Type::Con(name) => format!("(con {name:?})"),
            Type::App { head, args } => {
                format!("(app {} {})", head.to_sexp(), join(args, Type::to_sexp))
            }
            Type::Fun { from, to } => format!("(fun {} {})", from.to_sexp(), to.to_sexp()),
            Type::Record(fields) => {
                let body =
                    join(fields, |(name, ty)| format!("(field {name:?} {})", ty.to_sexp()));
                format!("(rec {body})")
            }
            Type::Sum(variants) => {
                let body = join(variants, |(tag, params)| {
                    if params.is_empty() {
                        format!("(variant {tag:?})")
                    } else {
                        format!("(variant {tag:?} {})", join(params, Type::to_sexp))
                    }
                });
                format!("(sum {body})")
            }
            Type::Hole => "hole".to_string(),
            Type::Any => "any".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use crate::ast::*;
    use cherry_span::{Position, Span};

    fn span() -> Span {
        Span::new(Position::new(1, 1), Position::new(1, 2))
    }

    fn local(name: &str) -> Expr {
        Expr::new(ExprKind::Identifier(IdForm::Local(name.to_string())), span())
    }

    #[test]
    fn test_infix_sexp_uses_operator_name() {
        let expr = Expr::infix(BinOp::Cons, local("x"), local("xs"));
        assert_eq!(expr.to_sexp(), r#"(cons (local "x") (local "xs"))"#);
    }

    #[test]
    fn test_infix_span_recomputed_from_operands() {
        let lhs = Expr::new(
            ExprKind::Literal(Lit::Number(1.0)),
            Span::new(Position::new(1, 5), Position::new(1, 6)),
        );
        let rhs = Expr::new(
            ExprKind::Literal(Lit::Number(2.0)),
            Span::new(Position::new(2, 1), Position::new(2, 2)),
        );
        let expr = Expr::infix(BinOp::Add, lhs, rhs);
        assert_eq!(expr.span, Span::new(Position::new(1, 5), Position::new(2, 2)));
    }

    #[test]
    fn test_number_sexp_drops_trailing_zero() {
        assert_eq!(Lit::Number(1.0).to_sexp(), "(number 1)");
        assert_eq!(Lit::Number(2.5).to_sexp(), "(number 2.5)");
    }

    #[test]
    fn test_module_sexp() {
        let module = Module {
            name: "Main".to_string(),
            imports: vec![Import {
                specifier: ImportSpecifier::Package("std/list".to_string()),
                alias: vec!["List".to_string()],
                exposing: vec!["map".to_string()],
            }],
            declarations: vec![Declaration::new(
                DeclKind::Let {
                    public: false,
                    name: "x".to_string(),
                    signature: Type::Any,
                    body: Expr::new(ExprKind::Literal(Lit::Number(1.0)), span()),
                },
                span(),
            )],
        };
        assert_eq!(
            module.to_sexp(),
            r#"(module "Main" (import (package "std/list") (as "List") (exposing "map")) (let "x" any (number 1)))"#
        );
    }

    #[test]
    fn test_pattern_sexp_shapes() {
        let pattern = Pattern::ArrayDestructure(vec![
            Pattern::Name("a".to_string()),
            Pattern::Spread("rest".to_string()),
        ]);
        assert_eq!(pattern.to_sexp(), r#"(array-destructure (name "a") (spread "rest"))"#);

        let record = Pattern::RecordDestructure(vec![
            ("x".to_string(), None),
            ("y".to_string(), Some(Pattern::Wildcard(None))),
        ]);
        assert_eq!(record.to_sexp(), r#"(record-destructure (field "x") (field "y" (wildcard)))"#);
    }

    #[test]
    fn test_type_sexp_shapes() {
        let ty = Type::Fun {
            from: Box::new(Type::App {
                head: Box::new(Type::Con("Maybe".to_string())),
                args: vec![Type::Var("a".to_string())],
            }),
            to: Box::new(Type::Any),
        };
        assert_eq!(ty.to_sexp(), r#"(fun (app (con "Maybe") (var "a")) any)"#);
    }
}
