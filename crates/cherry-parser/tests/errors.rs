//! Failure paths: committed errors, forbidden trailing commas,
//! reserved words, and end-of-input enforcement.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use cherry_parser::{ParseContext, ParseErrorKind, parse_module};
use cherry_span::Position;

#[test]
fn test_committed_let_reports_bad_name() {
    let err = parse_module("M", "let 5 = x").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingCamelCase);
    assert_eq!(err.position, Position::new(1, 5));
    assert_eq!(err.innermost_context(), Some(ParseContext::InDeclaration));
}

#[test]
fn test_error_display_includes_context() {
    let err = parse_module("M", "let 5 = x").unwrap_err();
    assert_eq!(err.to_string(), "expecting a camelCase name at 1:5 (in declaration)");
}

#[test]
fn test_keyword_cannot_name_a_binding() {
    let err = parse_module("M", "let ret = 1").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingCamelCase);
    assert_eq!(err.position, Position::new(1, 5));
}

#[test]
fn test_number_followed_by_letter_fails() {
    let err = parse_module("M", "run 123abc").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedChar('a'));
    assert_eq!(err.position, Position::new(1, 8));
    assert_eq!(err.innermost_context(), Some(ParseContext::InExpr));
}

#[test]
fn test_reserved_type_names_rejected() {
    for name in ["Array", "Boolean", "Number", "String"] {
        let err = parse_module("M", &format!("type {name} = #a")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectingCapitalCase, "type {name}");
        assert_eq!(err.position, Position::new(1, 6));
    }
    assert!(parse_module("M", "type Strings = #a").is_ok());
}

#[test]
fn test_trailing_commas_are_rejected() {
    assert!(parse_module("M", "run [1, 2,]").is_err());
    assert!(parse_module("M", "run { a: 1, }").is_err());
    assert!(parse_module("M", "ext c : { a: Number, }").is_err());
    assert!(parse_module("M", r#"import "a" exposing { x, }"#).is_err());
    assert!(parse_module("M", "run where x is { a, } => 1").is_err());
}

#[test]
fn test_exposing_trailing_comma_is_committed() {
    let err = parse_module("M", r#"import "a" exposing { x, }"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingCamelCase);
    assert_eq!(err.position, Position::new(1, 26));
    assert_eq!(err.innermost_context(), Some(ParseContext::InImport));
}

#[test]
fn test_missing_type_after_colon() {
    let err = parse_module("M", "ext f : ").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingType);
    assert_eq!(err.position, Position::new(1, 9));
}

#[test]
fn test_unterminated_template_is_committed() {
    let err = parse_module("M", "run `abc").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingSymbol("`".to_string()));
    assert_eq!(err.position, Position::new(1, 9));
}

#[test]
fn test_unterminated_string_fails() {
    assert!(parse_module("M", "let s = \"abc").is_err());
}

#[test]
fn test_trailing_input_reports_expecting_eof() {
    let err = parse_module("M", "123abc").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingEof);
    assert_eq!(err.position, Position::new(1, 1));
    assert_eq!(err.innermost_context(), None);

    let err = parse_module("M", "let x = 1 junk").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingEof);
    assert_eq!(err.position, Position::new(1, 11));
}

#[test]
fn test_missing_expression_body_fails_inside_declaration() {
    let err = parse_module("M", "let x = ").unwrap_err();
    assert_eq!(err.innermost_context(), Some(ParseContext::InExpr));
}

#[test]
fn test_block_without_ret_is_not_a_block() {
    // `let` commits inside the brace, and without `ret` the record
    // reading fails on the keyword, so the whole parse fails.
    assert!(parse_module("M", "run { let x = 1 }").is_err());
}

#[test]
fn test_empty_braces_are_neither_block_nor_record() {
    assert!(parse_module("M", "run {}").is_err());
}

#[test]
fn test_conditional_missing_then_is_committed() {
    let err = parse_module("M", "run if a b else c").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingKeyword("then".to_string()));
}

#[test]
fn test_import_after_declaration_is_rejected() {
    let err = parse_module("M", "let x = 1\nimport \"a\"").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectingEof);
    assert_eq!(err.position, Position::new(2, 1));
}
