use super::*;
use pretty_assertions::assert_eq;

#[test]
fn selector_matches_scope_paths() {
    let selector = Selector::parse("PostfixExpression/ArithOp, UnaryExpression/ArithOp").unwrap();
    assert!(selector.matches(&["Script", "UnaryExpression", "ArithOp"]));
    assert!(selector.matches(&["PostfixExpression", "Paren", "ArithOp"]));
    assert!(!selector.matches(&["Script", "BinaryExpression", "ArithOp"]));
}

#[test]
fn negation_matches_paths_without_the_name() {
    let selector = Selector::parse("-foo").unwrap();
    assert!(selector.matches(&["bar"]));
    assert!(selector.matches(&["bar", "baz"]));
    assert!(!selector.matches(&["bar", "foo"]));
}

#[test]
fn implicit_and_matches_any_relative_order() {
    let selector = Selector::parse("foo bar").unwrap();
    assert!(selector.matches(&["foo", "bar"]));
    assert!(selector.matches(&["bar", "x", "foo"]));
    assert!(!selector.matches(&["foo"]));
}

#[test]
fn escaped_punctuation() {
    let selector = Selector::parse("^(, ^)").unwrap();
    assert!(selector.matches(&["ArgList", "("]));
    assert!(selector.matches(&["ArgList", ")"]));
    assert!(!selector.matches(&["ArgList", ","]));
}

#[test]
fn spaced_escape_joins_the_preceding_name() {
    let selector = Selector::parse("ForSpec ^(").unwrap();
    assert_eq!(selector.expression(), &Expression::literal("ForSpec("));
    assert!(selector.matches(&["ForSpec("]));
    assert!(!selector.matches(&["ForSpec", "("]));

    // An explicit operator keeps them apart
    let selector = Selector::parse("ForSpec & ^(").unwrap();
    assert!(selector.matches(&["ForSpec", "("]));
}

#[test]
fn runaway_negation_is_an_error() {
    let source = format!("{}Number", "-".repeat(50_000));
    let err = Selector::parse(&source).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("selector nests deeper than {MAX_NESTING} levels at offset {MAX_NESTING}")
    );
}

#[test]
fn source_is_kept_verbatim() {
    let selector = Selector::parse("a  |b").unwrap();
    assert_eq!(selector.source(), "a  |b");
    assert_eq!(selector.to_string(), "a, b");
}

#[test]
fn from_str() {
    let selector: Selector = "Number, VariableName".parse().unwrap();
    assert_eq!(
        selector.expression(),
        &Expression::literal("Number").or(Expression::literal("VariableName"))
    );
}

#[test]
fn strict_mode_rejects_unknown_characters() {
    assert!(Selector::parse("Number ; String").is_ok());
    let err = Selector::parse_with_mode("Number ; String", LexMode::Strict).unwrap_err();
    assert_eq!(err.offset(), 7);
    assert_eq!(err.to_string(), "unexpected character ';' at offset 7");
}

#[test]
fn parse_errors_propagate() {
    let err = Selector::parse("(Number").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Expected {
            expected: TokenKind::RParen,
            ..
        }
    ));
}
