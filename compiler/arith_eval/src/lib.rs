//! Evaluator for expression trees.
//!
//! Depth-first: a number leaf parses its text, an operator node evaluates
//! its left child, then its right child, then applies the operator. The
//! cached computability flag is not consulted; evaluation simply fails at
//! the first variable leaf it reaches. Check [`ExprTree::is_computable`]
//! first for a clean up-front answer.

mod operators;

use std::fmt;

use arith_ir::stack::ensure_sufficient_stack;
use arith_ir::{ExprTree, Node, Span, TokenKind};
use tracing::debug;

pub use operators::evaluate_binary;

/// Result of evaluating a tree or subtree.
pub type EvalResult = Result<f64, EvalError>;

/// An evaluation failure.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum EvalError {
    /// A variable leaf that has not been substituted yet.
    UnresolvedVariable { name: String, span: Span },
    /// A number leaf whose text does not parse as a double.
    MalformedNumber { text: String, span: Span },
    /// An internal node whose token is not a binary operator.
    NotAnOperator { kind: TokenKind, span: Span },
}

impl EvalError {
    #[cold]
    pub fn unresolved_variable(name: impl Into<String>, span: Span) -> Self {
        EvalError::UnresolvedVariable {
            name: name.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            EvalError::UnresolvedVariable { span, .. }
            | EvalError::MalformedNumber { span, .. }
            | EvalError::NotAnOperator { span, .. } => *span,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnresolvedVariable { name, span } => write!(
                f,
                "cannot evaluate, variable `{name}` at {span} is not substituted yet"
            ),
            EvalError::MalformedNumber { text, span } => {
                write!(f, "malformed number {text:?} at {span}")
            }
            EvalError::NotAnOperator { kind, span } => write!(
                f,
                "{} at {span} cannot join two operands",
                kind.display_name()
            ),
        }
    }
}

impl std::error::Error for EvalError {}

/// Anything that reduces to a single number.
pub trait Evaluate {
    fn evaluate(&self) -> EvalResult;
}

impl Evaluate for Node {
    fn evaluate(&self) -> EvalResult {
        ensure_sufficient_stack(|| {
            let token = self.token();
            let Some((left, right)) = self.operands() else {
                return match token.kind {
                    TokenKind::Variable => {
                        Err(EvalError::unresolved_variable(&token.text, token.span))
                    }
                    _ => token.text.parse::<f64>().map_err(|_| EvalError::MalformedNumber {
                        text: token.text.clone(),
                        span: token.span,
                    }),
                };
            };

            let Some(op) = token.kind.binary_op() else {
                return Err(EvalError::NotAnOperator {
                    kind: token.kind,
                    span: token.span,
                });
            };
            let left = left.evaluate()?;
            let right = right.evaluate()?;
            Ok(evaluate_binary(op, left, right))
        })
    }
}

impl Evaluate for ExprTree {
    fn evaluate(&self) -> EvalResult {
        let result = self.root().evaluate();
        match &result {
            Ok(value) => debug!(value, "evaluated expression"),
            Err(error) => debug!(%error, "evaluation failed"),
        }
        result
    }
}
