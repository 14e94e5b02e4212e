//! Binary operator implementations.
//!
//! Plain IEEE-754 double arithmetic. Division by zero is not special-cased:
//! `1/0` is `inf`, `0/0` is `NaN`.

use arith_ir::BinaryOp;

/// Apply `op` to two already-evaluated operands.
#[inline]
pub fn evaluate_binary(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right,
    }
}
