//! Unified error type for the whole pipeline.

use std::fmt;

use arith_eval::EvalError;
use arith_ir::Span;
use arith_lexer::{LexError, LexErrorKind};
use arith_parse::{ParseError, ParseErrorKind};

/// Any failure from tokenizing, building or evaluating an expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl Error {
    /// Stable code identifying the error kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Lex(error) => match error.kind {
                LexErrorKind::InvalidChar { .. } => ErrorCode::E0001,
                LexErrorKind::MalformedNumber => ErrorCode::E0002,
                LexErrorKind::RepeatedDecimalPoint => ErrorCode::E0003,
                LexErrorKind::MalformedIdentifier => ErrorCode::E0004,
                LexErrorKind::UnknownTerm => ErrorCode::E0005,
            },
            Error::Parse(error) => match error.kind {
                ParseErrorKind::MissingOperands { .. } => ErrorCode::E1001,
                ParseErrorKind::IllegalCombination { .. } => ErrorCode::E1002,
                ParseErrorKind::EmptyGroup => ErrorCode::E1003,
                ParseErrorKind::UnmatchedClosingBracket => ErrorCode::E1101,
                ParseErrorKind::UnclosedOpeningBracket => ErrorCode::E1102,
            },
            Error::Eval(error) => match error {
                EvalError::UnresolvedVariable { .. } => ErrorCode::E6001,
                EvalError::MalformedNumber { .. } => ErrorCode::E6002,
                EvalError::NotAnOperator { .. } => ErrorCode::E6003,
            },
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Error::Lex(error) => error.span,
            Error::Parse(error) => error.span,
            Error::Eval(error) => error.span(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: ", self.code())?;
        match self {
            Error::Lex(error) => fmt::Display::fmt(error, f),
            Error::Parse(error) => fmt::Display::fmt(error, f),
            Error::Eval(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(error) => Some(error),
            Error::Parse(error) => Some(error),
            Error::Eval(error) => Some(error),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Error::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Error::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Error::Eval(error)
    }
}

/// Error codes.
///
/// Format: E#### where the leading digits give the stage:
/// - E0xxx: Lexical errors
/// - E10xx: Syntax errors
/// - E11xx: Bracket mismatches
/// - E6xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unclassifiable character
    E0001,
    /// Malformed number literal
    E0002,
    /// Repeated decimal point
    E0003,
    /// Malformed identifier
    E0004,
    /// Term matches no token shape
    E0005,
    /// Operator without two operands
    E1001,
    /// Illegal combination of operators and operands
    E1002,
    /// Empty bracket group
    E1003,
    /// Unmatched closing bracket
    E1101,
    /// Unclosed opening bracket
    E1102,
    /// Unresolved variable
    E6001,
    /// Unparsable number leaf
    E6002,
    /// Non-operator internal node
    E6003,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1101 => "E1101",
            ErrorCode::E1102 => "E1102",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    /// Lexical errors.
    pub fn is_lexical(self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Bracket nesting errors.
    pub fn is_bracket_mismatch(self) -> bool {
        self.as_str().starts_with("E11")
    }

    /// Operator/operand arity errors.
    pub fn is_syntax(self) -> bool {
        self.as_str().starts_with("E10")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
