//! Single-expression evaluation
//!
//! [`eval`] computes one expression against the wires resolved so far.
//! `None` means a referenced wire is not resolved yet, not an error: the
//! caller retries on a later propagation round. All arithmetic is native
//! `u16`, so complements wrap and shifted-out bits vanish without explicit
//! masking.

use bitwire_spec::{Expression, Signal, WireId};
use std::collections::HashMap;

/// Wires resolved so far within one solve. Scoped to a single
/// [`crate::resolve`] call and discarded afterward.
pub type ResolvedWires = HashMap<WireId, Signal>;

/// Evaluate `expr` if all of its wire operands are resolved.
pub fn eval(expr: &Expression, resolved: &ResolvedWires) -> Option<Signal> {
    match expr {
        Expression::Const { value } => Some(*value),
        Expression::Wire { source } => resolved.get(source).copied(),
        Expression::Not { input } => resolved.get(input).map(|v| !v),
        Expression::Binary { op, lhs, rhs } => {
            let lhs = resolved.get(lhs)?;
            let rhs = resolved.get(rhs)?;
            Some(op.apply(*lhs, *rhs))
        }
        Expression::BinaryImm { op, lhs, rhs } => {
            resolved.get(rhs).map(|rhs| op.apply(*lhs, *rhs))
        }
        Expression::Shift { op, input, amount } => {
            resolved.get(input).map(|v| op.apply(*v, *amount))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitwire_spec::{BinaryOp, ShiftOp};

    fn wire(name: &str) -> WireId {
        WireId::new(name).unwrap()
    }

    fn resolved(pairs: &[(&str, Signal)]) -> ResolvedWires {
        pairs.iter().map(|(n, v)| (wire(n), *v)).collect()
    }

    #[test]
    fn test_const_needs_no_wires() {
        let expr = Expression::Const { value: 123 };
        assert_eq!(eval(&expr, &ResolvedWires::new()), Some(123));
    }

    #[test]
    fn test_relay_waits_for_source() {
        let expr = Expression::Wire { source: wire("y") };
        assert_eq!(eval(&expr, &ResolvedWires::new()), None);
        assert_eq!(eval(&expr, &resolved(&[("y", 456)])), Some(456));
    }

    #[test]
    fn test_not_complements_16_bits() {
        let expr = Expression::Not { input: wire("x") };
        assert_eq!(eval(&expr, &resolved(&[("x", 123)])), Some(65412));
        assert_eq!(eval(&expr, &resolved(&[("x", 456)])), Some(65079));
        assert_eq!(eval(&expr, &resolved(&[("x", 0)])), Some(0xFFFF));
    }

    #[test]
    fn test_binary_needs_both_operands() {
        let expr = Expression::Binary {
            op: BinaryOp::And,
            lhs: wire("x"),
            rhs: wire("y"),
        };
        assert_eq!(eval(&expr, &resolved(&[("x", 123)])), None);
        assert_eq!(eval(&expr, &resolved(&[("y", 456)])), None);
        assert_eq!(eval(&expr, &resolved(&[("x", 123), ("y", 456)])), Some(72));
    }

    #[test]
    fn test_binary_imm_literal_always_ready() {
        let expr = Expression::BinaryImm {
            op: BinaryOp::Or,
            lhs: 1,
            rhs: wire("y"),
        };
        assert_eq!(eval(&expr, &ResolvedWires::new()), None);
        assert_eq!(eval(&expr, &resolved(&[("y", 456)])), Some(457));
    }

    #[test]
    fn test_shift_semantics() {
        let lshift = Expression::Shift {
            op: ShiftOp::Lshift,
            input: wire("x"),
            amount: 2,
        };
        let rshift = Expression::Shift {
            op: ShiftOp::Rshift,
            input: wire("y"),
            amount: 2,
        };
        assert_eq!(eval(&lshift, &resolved(&[("x", 123)])), Some(492));
        assert_eq!(eval(&rshift, &resolved(&[("y", 456)])), Some(114));
    }

    #[test]
    fn test_lshift_discards_high_bit() {
        let expr = Expression::Shift {
            op: ShiftOp::Lshift,
            input: wire("x"),
            amount: 1,
        };
        assert_eq!(eval(&expr, &resolved(&[("x", 0xFFFF)])), Some(0xFFFE));
    }
}
