//! Span invariants: every expression covers its sub-expressions, and
//! infix spans equal the extent of their operands.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use cherry_ast::{DeclKind, Expr, ExprKind, Lit, TemplateSegment};
use cherry_parser::parse_module;
use cherry_span::{Position, Span};

fn first_body(source: &str) -> Expr {
    let module = parse_module("M", source).unwrap();
    match &module.declarations[0].kind {
        DeclKind::Run(body) => body.clone(),
        DeclKind::Let { body, .. } => body.clone(),
        other => panic!("expected a run or let declaration, got {other:?}"),
    }
}

fn children(expr: &Expr) -> Vec<&Expr> {
    match &expr.kind {
        ExprKind::Access { target, .. } => vec![target.as_ref()],
        ExprKind::Application { callee, args } => {
            let mut out = vec![callee.as_ref()];
            out.extend(args.iter());
            out
        }
        ExprKind::Annotation { target, .. } => vec![target.as_ref()],
        ExprKind::Block { bindings, ret } => {
            let mut out: Vec<&Expr> = bindings.iter().map(|(_, value)| value).collect();
            out.push(ret.as_ref());
            out
        }
        ExprKind::Conditional { test, consequent, alternative } => {
            vec![test.as_ref(), consequent.as_ref(), alternative.as_ref()]
        }
        ExprKind::Identifier(_) => vec![],
        ExprKind::Infix { lhs, rhs, .. } => vec![lhs.as_ref(), rhs.as_ref()],
        ExprKind::Lambda { body, .. } => vec![body.as_ref()],
        ExprKind::Literal(lit) => match lit {
            Lit::Array(items) => items.iter().collect(),
            Lit::Record(fields) => fields.iter().map(|(_, value)| value).collect(),
            Lit::Template(segments) => segments
                .iter()
                .filter_map(|segment| match segment {
                    TemplateSegment::Expr(expr) => Some(expr),
                    TemplateSegment::Text(_) => None,
                })
                .collect(),
            Lit::Variant { args, .. } => args.iter().collect(),
            _ => vec![],
        },
        ExprKind::Match { scrutinee, arms } => {
            let mut out = vec![scrutinee.as_ref()];
            for arm in arms {
                if let Some(guard) = &arm.guard {
                    out.push(guard);
                }
                out.push(&arm.body);
            }
            out
        }
    }
}

fn assert_span_invariants(expr: &Expr) {
    assert!(
        expr.span.start <= expr.span.end,
        "span start after end in {}: {}",
        expr.to_sexp(),
        expr.span
    );
    if let ExprKind::Infix { lhs, rhs, .. } = &expr.kind {
        assert_eq!(
            expr.span,
            Span::new(lhs.span.start, rhs.span.end),
            "infix span not recomputed from operands in {}",
            expr.to_sexp()
        );
    }
    for child in children(expr) {
        assert!(
            expr.span.covers(child.span),
            "{} at {} does not cover child {} at {}",
            expr.to_sexp(),
            expr.span,
            child.to_sexp(),
            child.span
        );
        assert_span_invariants(child);
    }
}

#[test]
fn test_declaration_and_body_spans() {
    let module = parse_module("M", "pub let x = 1").unwrap();
    let decl = &module.declarations[0];
    assert_eq!(decl.span, Span::new(Position::new(1, 1), Position::new(1, 14)));
    let DeclKind::Let { body, .. } = &decl.kind else { panic!("expected let") };
    assert_eq!(body.span, Span::new(Position::new(1, 13), Position::new(1, 14)));
}

#[test]
fn test_infix_span_equals_operand_extent() {
    let body = first_body("run a + b * c");
    assert_eq!(body.span, Span::new(Position::new(1, 5), Position::new(1, 14)));
    assert_span_invariants(&body);

    let ExprKind::Infix { rhs, .. } = &body.kind else { panic!("expected infix") };
    assert_eq!(rhs.span, Span::new(Position::new(1, 9), Position::new(1, 14)));
}

#[test]
fn test_nested_expression_spans_cover_children() {
    let body = first_body("run if a then { ret x } else [1, f (y), `t${z}`]");
    assert_span_invariants(&body);
}

#[test]
fn test_match_and_lambda_spans_cover_children() {
    let body = first_body("run where f is g => x y => g (x) (y) is _ => h");
    assert_span_invariants(&body);
}

#[test]
fn test_multiline_literal_span() {
    let body = first_body("run [1,\n  2]");
    assert_eq!(body.span, Span::new(Position::new(1, 5), Position::new(2, 5)));
    assert_span_invariants(&body);
}

#[test]
fn test_record_shorthand_span_and_structure() {
    let shorthand = first_body("run { foo }");
    let explicit = first_body("run { foo: foo }");
    // Same structure modulo spans.
    assert_eq!(shorthand.to_sexp(), explicit.to_sexp());

    let ExprKind::Literal(Lit::Record(fields)) = &shorthand.kind else {
        panic!("expected record literal")
    };
    // The synthesized identifier spans the shorthand name itself.
    assert_eq!(fields[0].1.span, Span::new(Position::new(1, 7), Position::new(1, 10)));
}

#[test]
fn test_ignorables_do_not_change_structure() {
    let bare = parse_module("M", "let x = f (1)").unwrap();
    let spaced =
        parse_module("M", "// header\n\nlet   x =\tf (1)   // trailing\n\n").unwrap();
    assert_eq!(bare.to_sexp(), spaced.to_sexp());
}

#[test]
fn test_subexpression_keeps_inner_span() {
    // Parens are not part of the inner expression's span, so the infix
    // law holds across parenthesised operands.
    let body = first_body("run (a + b) * c");
    assert_span_invariants(&body);
    let ExprKind::Infix { lhs, .. } = &body.kind else { panic!("expected infix") };
    assert_eq!(lhs.span, Span::new(Position::new(1, 6), Position::new(1, 11)));
}
