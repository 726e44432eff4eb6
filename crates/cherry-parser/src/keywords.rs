//! Reserved word tables, resolved at compile time.

use phf::phf_set;

/// Words that can never be used as lower-case identifier names.
///
/// `extern` and `fun` are reserved without a grammar production.
pub(crate) static KEYWORDS: phf::Set<&'static str> = phf_set! {
    "import",
    "as",
    "exposing",
    "ext",
    "pkg",
    "pub",
    "extern",
    "run",
    "fun",
    "let",
    "ret",
    "if",
    "then",
    "else",
    "where",
    "is",
    "true",
    "false",
};

/// Type constructors owned by the language; `type` declarations cannot
/// shadow them.
pub(crate) static RESERVED_TYPE_NAMES: phf::Set<&'static str> = phf_set! {
    "Array",
    "Boolean",
    "Number",
    "String",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_membership() {
        assert!(KEYWORDS.contains("where"));
        assert!(KEYWORDS.contains("extern"));
        assert!(!KEYWORDS.contains("type"));
        assert!(!KEYWORDS.contains("map"));
    }

    #[test]
    fn test_reserved_type_names() {
        assert!(RESERVED_TYPE_NAMES.contains("Array"));
        assert!(!RESERVED_TYPE_NAMES.contains("Maybe"));
    }
}
