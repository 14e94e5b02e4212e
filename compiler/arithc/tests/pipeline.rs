//! End-to-end behaviour of the expression pipeline.

use arithc::{compile, evaluate, Error, ErrorCode, EvalError, Evaluate, LexerConfig};
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

fn bind(pairs: &[(&str, f64)]) -> FxHashMap<String, f64> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), *value))
        .collect()
}

// === Arithmetic ===

#[test]
fn precedence_and_grouping() {
    assert_eq!(evaluate("1 + 2 - 7 * 0"), Ok(3.0));
    assert_eq!(evaluate("1"), Ok(1.0));
    assert_eq!(evaluate("(1 + 3) * 4"), Ok(16.0));
    assert_eq!(evaluate("(24 / 6) + 6"), Ok(10.0));
}

#[test]
fn left_associativity() {
    assert_eq!(evaluate("8 - 3 - 2"), Ok(3.0));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("(1+3)*4"), evaluate("  ( 1 + 3 )   * 4 "));
}

#[test]
fn division_by_zero_yields_infinity() {
    assert_eq!(evaluate("5 / 0"), Ok(f64::INFINITY));
}

// === Errors ===

#[test]
fn syntax_errors() {
    for source in ["1 + 2 2 3", "123.123 ()", "1 +", "* 1", ""] {
        let err = evaluate(source).unwrap_err();
        assert!(err.code().is_syntax(), "{source:?}: {err}");
        assert!(matches!(err, Error::Parse(ref parse) if parse.is_syntax()));
    }
}

#[test]
fn bracket_mismatch_is_distinct_from_syntax() {
    let err = evaluate("(())) + 4").unwrap_err();
    assert!(err.code().is_bracket_mismatch());
    assert!(!err.code().is_syntax());
    assert!(matches!(err, Error::Parse(ref parse) if parse.is_bracket_mismatch()));
}

#[test]
fn lexical_errors_without_variables() {
    for source in ["123asd", "123.asd123", ".asdasd", "asd.12"] {
        let err = arithc::compile_with(source, LexerConfig::numbers_only()).unwrap_err();
        assert!(err.code().is_lexical(), "{source:?}");
    }
}

#[test]
fn lexical_errors_with_variables() {
    for source in ["123.asd123", ".asdasd", "1..2", "2 ^ 3"] {
        let err = evaluate(source).unwrap_err();
        assert!(matches!(err, Error::Lex(_)), "{source:?}: {err}");
    }
}

#[test]
fn standalone_term_probe() {
    let err = arithc::classify_term("+-123", LexerConfig::default()).unwrap_err();
    assert_eq!(Error::from(err).code(), ErrorCode::E0005);
    assert!(arithc::classify_term("123", LexerConfig::default()).is_ok());
}

// === Variables ===

#[test]
fn variable_flow() {
    let mut tree = compile("abc+cde-2*myvar+urvar").unwrap();
    assert!(!tree.is_computable());

    let mut names: Vec<String> = tree.variables().iter().cloned().collect();
    names.sort();
    assert_eq!(names, vec!["abc", "cde", "myvar", "urvar"]);

    tree.substitute(&bind(&[("abc", 12.0), ("cde", 1.0), ("myvar", 1.0)]));
    assert!(!tree.is_computable());
    assert!(matches!(
        tree.evaluate(),
        Err(EvalError::UnresolvedVariable { .. })
    ));

    tree.substitute(&bind(&[("urvar", 4.0)]));
    assert!(tree.is_computable());
    assert_eq!(tree.evaluate(), Ok(15.0));
}

#[test]
fn evaluate_rejects_variables() {
    let err = evaluate("x * 2").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6001);
}

#[test]
fn std_hashmap_bindings() {
    let mut tree = compile("rate * hours").unwrap();
    let bindings: std::collections::HashMap<String, f64> =
        [("rate".to_string(), 12.5), ("hours".to_string(), 8.0)]
            .into_iter()
            .collect();
    tree.substitute(&bindings);
    assert_eq!(tree.evaluate(), Ok(100.0));
}

#[test]
fn reconstruction_round_trips_bracket_free_input() {
    for source in ["abc+cde-2*myvar+urvar", "1+2-7*0", "8-3-2", "1.5/x*y"] {
        assert_eq!(compile(source).unwrap().to_string(), source);
    }
    assert_eq!(compile("1 + 2 * 3").unwrap().to_string(), "1+2*3");
}

#[test]
fn reconstruction_drops_brackets() {
    assert_eq!(compile("(1 + 3) * 4").unwrap().to_string(), "1+3*4");
}
