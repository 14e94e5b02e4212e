//! Operator-precedence tree builder.
//!
//! Builds an [`ExprTree`] directly from a token sequence with two explicit
//! stacks: finished subtrees on the operand stack, pending operators (and
//! open brackets) on the operator stack. Whenever the operator on top binds
//! at least as tightly as the incoming one it is reduced first, which makes
//! every operator left-associative.
//!
//! # Error ordering
//!
//! Operand shortfalls and unmatched `)` abort immediately. A bracket group
//! whose contents do not reduce to exactly one operand is remembered and
//! reported only once the whole input has been seen, so bracket nesting
//! problems elsewhere take precedence over it.

mod error;

use arith_ir::{ExprTree, Node, Span, Token, TokenKind};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

pub use error::{ParseError, ParseErrorKind};

/// Build an expression tree from a token sequence.
pub fn build(tokens: impl IntoIterator<Item = Token>) -> Result<ExprTree, ParseError> {
    let mut builder = TreeBuilder::default();
    for token in tokens {
        builder.push(token)?;
    }
    let tree = builder.finish()?;
    debug!(
        depth = tree.depth(),
        variables = tree.variables().len(),
        computable = tree.is_computable(),
        "built expression tree"
    );
    Ok(tree)
}

/// An entry on the operator stack.
#[derive(Debug)]
struct PendingOp {
    token: Token,
    /// Operand stack height when this entry was pushed. Only meaningful
    /// for `(`: its group must leave exactly one more operand behind.
    mark: usize,
}

#[derive(Default)]
struct TreeBuilder {
    operands: Vec<Node>,
    operators: SmallVec<[PendingOp; 8]>,
    variables: FxHashSet<String>,
    /// First malformed bracket group, reported at end of input.
    group_error: Option<ParseError>,
    /// Span covering every token seen so far.
    extent: Option<Span>,
}

impl TreeBuilder {
    fn push(&mut self, token: Token) -> Result<(), ParseError> {
        self.extent = Some(match self.extent {
            Some(extent) => extent.merge(token.span),
            None => token.span,
        });

        match token.kind {
            TokenKind::Number => self.operands.push(Node::leaf(token)),
            TokenKind::Variable => {
                self.variables.insert(token.text.clone());
                self.operands.push(Node::leaf(token));
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Times | TokenKind::Divide => {
                self.push_operator(token)?;
            }
            TokenKind::LParen => self.operators.push(PendingOp {
                token,
                mark: self.operands.len(),
            }),
            TokenKind::RParen => self.close_group(&token)?,
        }
        Ok(())
    }

    /// Reduce everything that binds at least as tightly as `token`, then
    /// push it.
    fn push_operator(&mut self, token: Token) -> Result<(), ParseError> {
        let incoming = token.kind.precedence();
        while let Some(top) = self.operators.pop() {
            if top.token.kind.precedence() < incoming {
                self.operators.push(top);
                break;
            }
            self.reduce(top.token)?;
        }
        self.operators.push(PendingOp {
            token,
            mark: self.operands.len(),
        });
        Ok(())
    }

    /// Reduce down to the matching `(` and discard it.
    fn close_group(&mut self, close: &Token) -> Result<(), ParseError> {
        let open = loop {
            let Some(top) = self.operators.pop() else {
                return Err(ParseError::unmatched_closing_bracket(close.span));
            };
            if top.token.kind == TokenKind::LParen {
                break top;
            }
            self.reduce(top.token)?;
        };
        let span = open.token.span.merge(close.span);
        let produced = self.operands.len().checked_sub(open.mark);
        trace!(?produced, %span, "closed group");
        let error = match produced {
            Some(1) => None,
            Some(0) | None => Some(ParseError::empty_group(span)),
            Some(n) => Some(ParseError::illegal_combination(span, n)),
        };
        if self.group_error.is_none() {
            self.group_error = error;
        }
        Ok(())
    }

    /// Combine an operator already popped off the operator stack with the
    /// top two operands into a new internal node.
    fn reduce(&mut self, token: Token) -> Result<(), ParseError> {
        if self.operands.len() < 2 {
            return Err(ParseError::missing_operands(
                token.span,
                token.kind,
                self.operands.len(),
            ));
        }
        let (Some(rhs), Some(lhs)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(ParseError::missing_operands(token.span, token.kind, 0));
        };
        trace!(op = ?token.kind, "reduce");
        self.operands.push(Node::binary(token, lhs, rhs));
        Ok(())
    }

    fn finish(mut self) -> Result<ExprTree, ParseError> {
        while let Some(top) = self.operators.pop() {
            if top.token.kind == TokenKind::LParen {
                return Err(ParseError::unclosed_opening_bracket(top.token.span));
            }
            self.reduce(top.token)?;
        }

        if let Some(error) = self.group_error {
            return Err(error);
        }

        let extent = self.extent.unwrap_or(Span::DUMMY);
        let count = self.operands.len();
        match (self.operands.pop(), count) {
            (Some(root), 1) => Ok(ExprTree::new(root, self.variables)),
            _ => Err(ParseError::illegal_combination(extent, count)),
        }
    }
}
