//! Arith IR - shared data structures for the arithmetic pipeline.
//!
//! This crate contains the types every stage passes along:
//! - Spans for source locations
//! - Tokens, token kinds and the operator precedence table
//! - The owned binary expression tree, including variable substitution
//!   and computability tracking
//!
//! Data flows strictly forward: `&str -> Vec<Token> -> ExprTree -> f64`.
//! Nothing here reaches back into an earlier stage.

mod span;
pub mod stack;
mod token;
mod tree;

pub use span::Span;
pub use token::{BinaryOp, Token, TokenKind};
pub use tree::{ExprTree, Node};
