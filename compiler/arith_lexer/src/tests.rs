use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn texts(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.text)
        .collect()
}

fn error_kind(source: &str, config: LexerConfig) -> LexErrorKind {
    tokenize_with(source, config).unwrap_err().kind
}

// === Token sequences ===

#[test]
fn operators_and_numbers() {
    use TokenKind::{Minus, Number, Plus, Times};
    assert_eq!(
        kinds("1 + 2 - 7 * 0"),
        vec![Number, Plus, Number, Minus, Number, Times, Number]
    );
}

#[test]
fn brackets_need_no_spaces() {
    use TokenKind::{Divide, LParen, Number, Plus, RParen};
    assert_eq!(
        kinds("(24/6)+6"),
        vec![LParen, Number, Divide, Number, RParen, Plus, Number]
    );
}

#[test]
fn decimals_stay_one_token() {
    assert_eq!(texts("123.123 + .5"), vec!["123.123", "+", ".5"]);
}

#[test]
fn variables_are_tokens() {
    assert_eq!(
        texts("abc+cde-2*myvar+urvar"),
        vec!["abc", "+", "cde", "-", "2", "*", "myvar", "+", "urvar"]
    );
    assert_eq!(kinds("abc")[0], TokenKind::Variable);
}

#[test]
fn digit_after_identifier_starts_a_number() {
    use TokenKind::{Number, Variable};
    assert_eq!(kinds("abc1"), vec![Variable, Number]);
    assert_eq!(texts("abc1"), vec!["abc", "1"]);
}

#[test]
fn letter_after_number_starts_an_identifier() {
    assert_eq!(texts("123asd"), vec!["123", "asd"]);
}

#[test]
fn dot_after_identifier_starts_a_number() {
    assert_eq!(texts("asd.12"), vec!["asd", ".12"]);
}

#[test]
fn empty_and_blank_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("    ").unwrap().is_empty());
}

#[test]
fn spans_point_into_source() {
    let tokens = tokenize("12 + xy").unwrap();
    let spans: Vec<Span> = tokens.iter().map(|token| token.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 2), Span::new(3, 4), Span::new(5, 7)]
    );
}

// === Lexical errors ===

#[test]
fn unclassifiable_characters() {
    let err = tokenize("1 # 2").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidChar { ch: '#' });
    assert_eq!(err.span, Span::new(2, 3));
    assert_eq!(
        error_kind("1\t+ 2", LexerConfig::default()),
        LexErrorKind::InvalidChar { ch: '\t' }
    );
}

#[test]
fn non_ascii_span_covers_whole_char() {
    let err = tokenize("1+é").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidChar { ch: 'é' });
    assert_eq!(err.span, Span::new(2, 4));
}

#[test]
fn repeated_decimal_point() {
    let err = tokenize("1..2").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::RepeatedDecimalPoint);
    assert_eq!(err.span, Span::new(2, 3));
    assert_eq!(
        error_kind("1.2.3", LexerConfig::default()),
        LexErrorKind::RepeatedDecimalPoint
    );
}

#[test]
fn trailing_dot_is_malformed() {
    let err = tokenize("12. + 1").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::MalformedNumber);
    assert_eq!(err.span, Span::new(0, 3));
    assert_eq!(
        error_kind("12.", LexerConfig::default()),
        LexErrorKind::MalformedNumber
    );
}

#[test]
fn bare_dot_is_malformed() {
    assert_eq!(
        error_kind(".asdasd", LexerConfig::default()),
        LexErrorKind::MalformedNumber
    );
    assert_eq!(
        error_kind("123.asd123", LexerConfig::default()),
        LexErrorKind::MalformedNumber
    );
}

#[test]
fn underscore_identifier_is_malformed() {
    let err = tokenize("a_b + 1").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::MalformedIdentifier);
    assert_eq!(err.span, Span::new(0, 3));
}

#[test]
fn numbers_only_rejects_letters() {
    let config = LexerConfig::numbers_only();
    for (source, ch) in [
        ("123asd", 'a'),
        ("123.asd123", 'a'),
        (".asdasd", 'a'),
        ("asd.12", 'a'),
        ("1 + x", 'x'),
    ] {
        assert_eq!(
            error_kind(source, config),
            LexErrorKind::InvalidChar { ch },
            "{source}"
        );
    }
    assert_eq!(tokenize_with("1 + 2", config).unwrap().len(), 3);
}

#[test]
fn first_error_wins() {
    let err = tokenize("1..2 # 3").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::RepeatedDecimalPoint);
}

// === Standalone terms ===

#[test]
fn classify_single_terms() {
    let config = LexerConfig::default();
    assert_eq!(classify_term("123", config), Ok(TokenKind::Number));
    assert_eq!(classify_term("1.25", config), Ok(TokenKind::Number));
    assert_eq!(classify_term("+", config), Ok(TokenKind::Plus));
    assert_eq!(classify_term("/", config), Ok(TokenKind::Divide));
    assert_eq!(classify_term(")", config), Ok(TokenKind::RParen));
    assert_eq!(classify_term("abc", config), Ok(TokenKind::Variable));
}

#[test]
fn classify_rejects_compound_terms() {
    let config = LexerConfig::default();
    for term in ["+-123", "123asd", "()", "1.", "", " ", "a_b"] {
        let err = classify_term(term, config).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnknownTerm, "{term:?}");
    }
    assert!(classify_term("abc", LexerConfig::numbers_only()).is_err());
}

// === Property tests ===

mod proptest_lexer {
    use super::super::{tokenize, Token, TokenKind};
    use crate::char_class::{is_identifier_shape, is_number_shape};
    use proptest::prelude::*;

    fn piece() -> impl Strategy<Value = String> {
        prop_oneof![
            "[0-9]{1,4}(\\.[0-9]{1,3})?",
            "[a-zA-Z]{1,5}",
            "[-+*/()]",
        ]
    }

    proptest! {
        #[test]
        fn never_panics_and_is_deterministic(source in "\\PC{0,40}") {
            let first = tokenize(&source);
            let second = tokenize(&source);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn space_separated_pieces_round_trip(pieces in proptest::collection::vec(piece(), 0..20)) {
            let source = pieces.join(" ");
            let tokens = tokenize(&source).unwrap();
            let texts: Vec<String> = tokens.into_iter().map(|token| token.text).collect();
            prop_assert_eq!(texts, pieces);
        }

        #[test]
        fn emitted_tokens_have_valid_shapes(source in "[0-9a-z. +*/()-]{0,30}") {
            if let Ok(tokens) = tokenize(&source) {
                for Token { kind, text, .. } in tokens {
                    match kind {
                        TokenKind::Number => prop_assert!(is_number_shape(&text)),
                        TokenKind::Variable => prop_assert!(is_identifier_shape(&text)),
                        _ => prop_assert_eq!(text.len(), 1),
                    }
                }
            }
        }
    }
}
