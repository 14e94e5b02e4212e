//! Character classes driving the tokenizer state machine.

/// The class of a single source character.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum CharClass {
    Plus,
    Minus,
    Times,
    Divide,
    Dot,
    LParen,
    RParen,
    Space,
    Digit,
    /// ASCII letters and `_`. The underscore is classified here but
    /// rejected when the identifier is flushed.
    Alphabetic,
}

impl CharClass {
    /// Classify `ch`, or `None` if it belongs to no class.
    #[inline]
    pub(crate) fn of(ch: char) -> Option<Self> {
        let class = match ch {
            '+' => CharClass::Plus,
            '-' => CharClass::Minus,
            '*' => CharClass::Times,
            '/' => CharClass::Divide,
            '.' => CharClass::Dot,
            '(' => CharClass::LParen,
            ')' => CharClass::RParen,
            ' ' => CharClass::Space,
            '0'..='9' => CharClass::Digit,
            'a'..='z' | 'A'..='Z' | '_' => CharClass::Alphabetic,
            _ => return None,
        };
        Some(class)
    }
}

/// `digit* ('.' digit+)*`
pub(crate) fn is_number_shape(text: &str) -> bool {
    let mut parts = text.split('.');
    let whole_ok = parts
        .next()
        .is_some_and(|whole| whole.bytes().all(|b| b.is_ascii_digit()));
    whole_ok && parts.all(|frac| !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()))
}

/// One or more ASCII letters.
pub(crate) fn is_identifier_shape(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphabetic())
}
