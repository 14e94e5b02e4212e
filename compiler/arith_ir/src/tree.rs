//! Owned binary expression tree.
//!
//! Every parent exclusively owns its two children, so the structure is a
//! plain tree: no sharing, no cycles. Leaves are `Number` or `Variable`
//! tokens; internal nodes carry an operator token and always have exactly
//! two children.
//!
//! # Computability
//!
//! Each node caches whether its subtree is free of unresolved variables.
//! The flag is set bottom-up at construction and kept consistent by
//! [`ExprTree::substitute`], which rewrites variable leaves in place and
//! then recomputes the flag for every internal node in post-order.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::stack::ensure_sufficient_stack;
use crate::{Token, TokenKind};

/// The two children of an internal node.
///
/// The derived impls recurse through [`Node`]'s, which grow the stack.
#[derive(Clone, Debug, PartialEq)]
struct Operands {
    left: Node,
    right: Node,
}

/// A node of the expression tree.
pub struct Node {
    token: Token,
    operands: Option<Box<Operands>>,
    computable: bool,
}

impl Node {
    /// Create a leaf. A `Variable` leaf starts out not computable.
    pub fn leaf(token: Token) -> Self {
        let computable = token.kind != TokenKind::Variable;
        Node {
            token,
            operands: None,
            computable,
        }
    }

    /// Create an internal node owning `left` and `right`.
    pub fn binary(token: Token, left: Node, right: Node) -> Self {
        let computable = left.computable && right.computable;
        Node {
            token,
            operands: Some(Box::new(Operands { left, right })),
            computable,
        }
    }

    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The `(left, right)` children, or `None` for a leaf.
    #[inline]
    pub fn operands(&self) -> Option<(&Node, &Node)> {
        self.operands.as_deref().map(|ops| (&ops.left, &ops.right))
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.operands.is_none()
    }

    /// `false` iff this subtree still contains a `Variable` leaf.
    #[inline]
    pub fn is_computable(&self) -> bool {
        self.computable
    }

    /// Height of the subtree: 1 for a leaf.
    pub fn depth(&self) -> usize {
        ensure_sufficient_stack(|| match self.operands() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 1,
        })
    }

    /// Rewrite pass: promote every bound `Variable` leaf to a `Number`.
    ///
    /// Returns the number of leaves rewritten.
    fn bind<S: BuildHasher>(&mut self, bindings: &HashMap<String, f64, S>) -> usize {
        ensure_sufficient_stack(|| match self.operands.as_deref_mut() {
            Some(ops) => ops.left.bind(bindings) + ops.right.bind(bindings),
            None => {
                if self.token.kind != TokenKind::Variable {
                    return 0;
                }
                let Some(value) = bindings.get(&self.token.text) else {
                    return 0;
                };
                self.token.kind = TokenKind::Number;
                self.token.text = value.to_string();
                self.computable = true;
                1
            }
        })
    }

    /// Recompute pass: children before parent.
    fn recompute(&mut self) -> bool {
        ensure_sufficient_stack(|| {
            if let Some(ops) = self.operands.as_deref_mut() {
                let left = ops.left.recompute();
                let right = ops.right.recompute();
                self.computable = left && right;
            }
            self.computable
        })
    }

    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self.operands() {
            Some((left, right)) => {
                left.render(out)?;
                out.write_str(&self.token.text)?;
                right.render(out)
            }
            None => out.write_str(&self.token.text),
        })
    }
}

/// Tear down iteratively; the derived drop would recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let Some(operands) = self.operands.take() else {
            return;
        };
        let mut pending = vec![*operands];
        while let Some(mut ops) = pending.pop() {
            for child in [&mut ops.left, &mut ops.right] {
                if let Some(grandchildren) = child.operands.take() {
                    pending.push(*grandchildren);
                }
            }
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Node {
            token: self.token.clone(),
            operands: self.operands.clone(),
            computable: self.computable,
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| {
            self.computable == other.computable
                && self.token == other.token
                && self.operands == other.operands
        })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Node")
                .field("token", &self.token)
                .field("operands", &self.operands)
                .field("computable", &self.computable)
                .finish()
        })
    }
}

/// In-order reconstruction: left subtree, token text, right subtree.
///
/// Brackets are structural only and never become nodes, so the rendering
/// preserves token order but not the original grouping.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

/// A parsed expression: a single root plus the variable names it referenced.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprTree {
    root: Node,
    variables: FxHashSet<String>,
}

impl ExprTree {
    pub fn new(root: Node, variables: FxHashSet<String>) -> Self {
        ExprTree { root, variables }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Names of the variables seen while the tree was built.
    ///
    /// Substitution never shrinks this set; it records what the expression
    /// originally referenced.
    #[inline]
    pub fn variables(&self) -> &FxHashSet<String> {
        &self.variables
    }

    /// `true` once every variable leaf has been bound.
    #[inline]
    pub fn is_computable(&self) -> bool {
        self.root.is_computable()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Bind variable leaves to values.
    ///
    /// Names absent from the tree are ignored; variables absent from
    /// `bindings` stay symbolic. Already-bound leaves are numbers and are
    /// never touched again, so repeating a call is a no-op.
    pub fn substitute<S: BuildHasher>(&mut self, bindings: &HashMap<String, f64, S>) {
        let bound = self.root.bind(bindings);
        let computable = self.root.recompute();
        debug!(
            requested = bindings.len(),
            bound, computable, "substituted variables"
        );
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
