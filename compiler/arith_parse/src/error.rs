//! Tree builder errors.
//!
//! Two families that callers must be able to tell apart:
//! - syntax errors: operators and operands do not pair up
//! - bracket mismatches: `(` and `)` do not nest
//!
//! Both abort the build; no partial tree is ever returned.

use std::fmt;

use arith_ir::{Span, TokenKind};

/// An error produced while building the expression tree.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    // === Syntax ===
    /// A reduction of `op` found fewer than two operands.
    MissingOperands { op: TokenKind, found: usize },
    /// After draining every operator, the operand stack did not hold
    /// exactly one node.
    IllegalCombination { operands: usize },
    /// A bracket pair enclosing no operand, e.g. `()`.
    EmptyGroup,

    // === Bracket mismatch ===
    /// `)` with no `(` left to match.
    UnmatchedClosingBracket,
    /// `(` still open at end of input.
    UnclosedOpeningBracket,
}

impl ParseErrorKind {
    /// `true` for the bracket nesting family.
    pub fn is_bracket_mismatch(&self) -> bool {
        matches!(
            self,
            ParseErrorKind::UnmatchedClosingBracket | ParseErrorKind::UnclosedOpeningBracket
        )
    }
}

impl ParseError {
    #[cold]
    pub fn missing_operands(span: Span, op: TokenKind, found: usize) -> Self {
        Self {
            span,
            kind: ParseErrorKind::MissingOperands { op, found },
        }
    }

    #[cold]
    pub fn illegal_combination(span: Span, operands: usize) -> Self {
        Self {
            span,
            kind: ParseErrorKind::IllegalCombination { operands },
        }
    }

    #[cold]
    pub fn empty_group(span: Span) -> Self {
        Self {
            span,
            kind: ParseErrorKind::EmptyGroup,
        }
    }

    #[cold]
    pub fn unmatched_closing_bracket(span: Span) -> Self {
        Self {
            span,
            kind: ParseErrorKind::UnmatchedClosingBracket,
        }
    }

    #[cold]
    pub fn unclosed_opening_bracket(span: Span) -> Self {
        Self {
            span,
            kind: ParseErrorKind::UnclosedOpeningBracket,
        }
    }

    #[inline]
    pub fn is_bracket_mismatch(&self) -> bool {
        self.kind.is_bracket_mismatch()
    }

    #[inline]
    pub fn is_syntax(&self) -> bool {
        !self.is_bracket_mismatch()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::MissingOperands { op, found } => write!(
                f,
                "invalid number of operands for {}: expected 2, found {found}",
                op.display_name()
            )?,
            ParseErrorKind::IllegalCombination { operands } => write!(
                f,
                "illegal combination of operators and operands ({operands} operands left, expected 1)"
            )?,
            ParseErrorKind::EmptyGroup => f.write_str("empty bracket group")?,
            ParseErrorKind::UnmatchedClosingBracket => {
                f.write_str("unequal amount of opening and closing brackets: unmatched `)`")?;
            }
            ParseErrorKind::UnclosedOpeningBracket => {
                f.write_str("unequal amount of opening and closing brackets: unclosed `(`")?;
            }
        }
        write!(f, " at {}", self.span)
    }
}

impl std::error::Error for ParseError {}
