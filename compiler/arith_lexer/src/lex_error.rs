//! Lexer error types.
//!
//! Errors carry WHERE (`span`), WHAT (`kind`) and WHY (`context`, what the
//! lexer was accumulating when it gave up). Tokenization stops at the first
//! error; there is no recovery.

use std::fmt;

use arith_ir::Span;

/// A lexical error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking.
    pub context: LexErrorContext,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Character outside every character class (or a letter while
    /// variables are disabled).
    InvalidChar { ch: char },
    /// A second `.` inside one numeric literal.
    RepeatedDecimalPoint,
    /// Accumulated digits and dots do not form `digit* ('.' digit+)*`.
    MalformedNumber,
    /// Accumulated identifier contains something other than ASCII letters.
    MalformedIdentifier,
    /// A standalone term matches no token shape.
    UnknownTerm,
}

/// What the lexer was doing at the point of error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Between tokens.
    #[default]
    TopLevel,
    /// Inside a numeric literal.
    NumberLiteral,
    /// Inside an identifier.
    Identifier,
    /// Classifying a complete standalone term.
    Term,
}

impl LexError {
    /// Create an unclassifiable character error.
    #[cold]
    pub fn invalid_char(span: Span, ch: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidChar { ch },
            context: LexErrorContext::TopLevel,
        }
    }

    /// Create a repeated decimal point error.
    #[cold]
    pub fn repeated_decimal_point(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::RepeatedDecimalPoint,
            context: LexErrorContext::NumberLiteral,
        }
    }

    /// Create a malformed number error spanning the whole literal.
    #[cold]
    pub fn malformed_number(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::MalformedNumber,
            context: LexErrorContext::NumberLiteral,
        }
    }

    /// Create a malformed identifier error spanning the whole identifier.
    #[cold]
    pub fn malformed_identifier(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::MalformedIdentifier,
            context: LexErrorContext::Identifier,
        }
    }

    /// Create an unknown term error.
    #[cold]
    pub fn unknown_term(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnknownTerm,
            context: LexErrorContext::Term,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::InvalidChar { ch } => {
                write!(f, "unclassifiable character {ch:?}")?;
            }
            LexErrorKind::RepeatedDecimalPoint => {
                f.write_str("repeated decimal point in number")?;
            }
            LexErrorKind::MalformedNumber => {
                f.write_str("malformed number, expected digits with optional `.digits` parts")?;
            }
            LexErrorKind::MalformedIdentifier => {
                f.write_str("malformed identifier, expected ASCII letters only")?;
            }
            LexErrorKind::UnknownTerm => {
                f.write_str("term does not match any token shape")?;
            }
        }
        write!(f, " at {}", self.span)
    }
}

impl std::error::Error for LexError {}
