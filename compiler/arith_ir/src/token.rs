//! Token types shared by the lexer and the tree builder.

use super::Span;
use std::fmt;

/// A classified lexical unit together with its literal text.
///
/// `text` is the exact slice the token was cut from. Number tokens are
/// parsed from it at evaluation time, and variable tokens are identified
/// by it during substitution.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Create a token without a source location, for tests and bound values.
    pub fn dummy(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, Span::DUMMY)
    }

    /// Create a single-character operator or bracket token.
    ///
    /// Returns `None` for `Number` and `Variable`, which have no fixed text.
    pub fn punct(kind: TokenKind, span: Span) -> Option<Self> {
        kind.symbol().map(|symbol| Token::new(kind, symbol, span))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Numeric literal: `12`, `3.5`, `.25`
    Number,
    /// Identifier made of ASCII letters: `x`, `myvar`
    Variable,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// Operator precedence table. Higher binds tighter; all binary operators
    /// are left-associative.
    ///
    /// `LParen` sits at `0` so that it stops a reduction run without ever
    /// being reduced itself. Operands and `RParen` never reach the operator
    /// stack and have no precedence.
    #[inline]
    pub const fn precedence(self) -> Option<u8> {
        match self {
            TokenKind::LParen => Some(0),
            TokenKind::Plus | TokenKind::Minus => Some(1),
            TokenKind::Times | TokenKind::Divide => Some(2),
            TokenKind::Number | TokenKind::Variable | TokenKind::RParen => None,
        }
    }

    /// The arithmetic operation an operator token stands for.
    #[inline]
    pub const fn binary_op(self) -> Option<BinaryOp> {
        match self {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Times => Some(BinaryOp::Mul),
            TokenKind::Divide => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Whether this kind becomes a leaf of the tree.
    #[inline]
    pub const fn is_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Variable)
    }

    /// Fixed source text of punctuation kinds.
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Times => Some("*"),
            TokenKind::Divide => Some("/"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Number | TokenKind::Variable => None,
        }
    }

    /// Human-readable name for error messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Variable => "variable",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Times => "`*`",
            TokenKind::Divide => "`/`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
        }
    }
}

/// Binary arithmetic operations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
