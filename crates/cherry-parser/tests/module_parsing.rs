//! End-to-end module parsing against the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use cherry_parser::parse_module;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_public_let_with_number_body() {
    init_tracing();
    let module = parse_module("Main", "pub let x = 1").unwrap();
    assert_eq!(module.to_sexp(), r#"(module "Main" (let pub "x" any (number 1)))"#);
}

#[test]
fn test_package_import_with_alias_and_exposing() {
    let module =
        parse_module("M", r#"import pkg "std/list" as List.Core exposing { map, filter }"#)
            .unwrap();
    assert_eq!(
        module.to_sexp(),
        r#"(module "M" (import (package "std/list") (as "List" "Core") (exposing "map" "filter")))"#
    );
}

#[test]
fn test_import_specifier_forms() {
    let module = parse_module(
        "M",
        "import ext \"host/io\"\nimport pkg \"std/math\"\nimport \"local/util\" as Util",
    )
    .unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (import (external "host/io"))"#,
            r#" (import (package "std/math"))"#,
            r#" (import (local "local/util") (as "Util")))"#
        )
    );
}

#[test]
fn test_lambda_declaration() {
    let module = parse_module("M", "let f = x y => x + y").unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (let "f" any"#,
            r#" (lambda (params (name "x") (name "y")) (add (local "x") (local "y")))))"#
        )
    );
}

#[test]
fn test_run_match_with_array_destructures() {
    let module = parse_module("M", "run where xs is [a, ...rest] => a is [] => 0").unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (run (where (local "xs")"#,
            r#" (case (array-destructure (name "a") (spread "rest")) (local "a"))"#,
            r#" (case (array-destructure) (number 0)))))"#
        )
    );
}

#[test]
fn test_template_lambda_declaration() {
    let module = parse_module("M", "let greet = name => `hello ${name}!`").unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (let "greet" any (lambda (params (name "name"))"#,
            r#" (template (text "hello ") (local "name") (text "!")))))"#
        )
    );
}

#[test]
fn test_enum_type_declaration() {
    let module = parse_module("M", "type Maybe a = #some a | #none").unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (type "Maybe" (vars "a")"#,
            r#" (enum (variant "some" (var "a")) (variant "none"))))"#
        )
    );
}

#[test]
fn test_record_and_abstract_type_declarations() {
    let module =
        parse_module("M", "type Config = { debug: Boolean, level: Number }\npub type Token")
            .unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (type "Config" (vars)"#,
            r#" (record (field "debug" (con "Boolean")) (field "level" (con "Number"))))"#,
            r#" (type pub "Token" (vars) abstract))"#
        )
    );
}

#[test]
fn test_ext_declarations() {
    let module = parse_module("M", "pub ext print : String -> ()\next now").unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (ext pub "print" (fun (con "String") (con "()")))"#,
            r#" (ext "now" any))"#
        )
    );
}

#[test]
fn test_pub_backtracks_between_ext_and_let() {
    let module = parse_module("M", "pub let x = 1\npub ext y : Number").unwrap();
    assert_eq!(
        module.to_sexp(),
        r#"(module "M" (let pub "x" any (number 1)) (ext pub "y" (con "Number")))"#
    );
}

#[test]
fn test_annotated_let_declaration() {
    let module = parse_module("M", "let inc : Number -> Number = n => n + 1").unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (let "inc" (fun (con "Number") (con "Number"))"#,
            r#" (lambda (params (name "n")) (add (local "n") (number 1)))))"#
        )
    );
}

#[test]
fn test_empty_module() {
    assert_eq!(parse_module("Empty", "").unwrap().to_sexp(), r#"(module "Empty")"#);
    assert_eq!(
        parse_module("Empty", "  \n\t// just a comment\n").unwrap().to_sexp(),
        r#"(module "Empty")"#
    );
}

#[test]
fn test_consecutive_declarations_stay_separate() {
    let module = parse_module("M", "let f = x => x\nlet g = 1").unwrap();
    assert_eq!(
        module.to_sexp(),
        concat!(
            r#"(module "M" (let "f" any (lambda (params (name "x")) (local "x")))"#,
            r#" (let "g" any (number 1)))"#
        )
    );
}

#[test]
fn test_application_arguments_stay_on_one_line() {
    // `(2)` on its own line is not an argument of `f 1`.
    let module = parse_module("M", "let a = f (1)\nrun a").unwrap();
    assert_eq!(
        module.to_sexp(),
        r#"(module "M" (let "a" any (apply (local "f") (number 1))) (run (local "a")))"#
    );
}

#[test]
fn test_full_module_shape() {
    init_tracing();
    let source = r#"
// Entry module.
import ext "host/io" as IO
import pkg "std/list" exposing { map }

pub type Maybe a = #some a | #none

pub let level = 3
let classify = n =>
  if n > level then #high else #low

run IO.print (`level ${level}`)
"#;
    let module = parse_module("Main", source).unwrap();
    assert_eq!(module.imports.len(), 2);
    assert_eq!(module.declarations.len(), 4);
    assert_eq!(
        module.declarations[2].to_sexp(),
        concat!(
            r#"(let "classify" any (lambda (params (name "n"))"#,
            r#" (if (gt (local "n") (local "level")) (variant "high") (variant "low"))))"#
        )
    );
    assert_eq!(
        module.declarations[3].to_sexp(),
        concat!(
            r#"(run (apply (scoped "IO" (local "print"))"#,
            r#" (template (text "level ") (local "level"))))"#
        )
    );
}
