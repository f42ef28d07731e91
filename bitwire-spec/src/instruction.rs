//! Circuit instructions
//!
//! One instruction wires the value of an expression into a target wire.
//! The expression union is closed: exactly six shapes exist, so gate
//! dispatch in the solver is exhaustiveness-checked and an "unsupported
//! gate" condition cannot be represented.

use crate::wire::WireId;
use crate::{Signal, MAX_SHIFT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-operand bitwise gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    And,
    Or,
}

impl BinaryOp {
    /// Apply the gate to two 16-bit signals.
    pub fn apply(self, lhs: Signal, rhs: Signal) -> Signal {
        match self {
            BinaryOp::And => lhs & rhs,
            BinaryOp::Or => lhs | rhs,
        }
    }

    /// Source-language mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
        }
    }
}

/// Bit-shift gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftOp {
    Lshift,
    Rshift,
}

impl ShiftOp {
    /// Shift a 16-bit signal by `amount` bits (0-15). Shifted-out bits are
    /// discarded, vacated bits are zero-filled.
    ///
    /// `amount` must be at most [`MAX_SHIFT`]; the parser guarantees this for
    /// parsed circuits.
    pub fn apply(self, input: Signal, amount: u8) -> Signal {
        debug_assert!(amount <= MAX_SHIFT, "shift amount {} exceeds {}", amount, MAX_SHIFT);
        match self {
            ShiftOp::Lshift => input << amount,
            ShiftOp::Rshift => input >> amount,
        }
    }

    /// Source-language mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            ShiftOp::Lshift => "LSHIFT",
            ShiftOp::Rshift => "RSHIFT",
        }
    }
}

/// Right-hand side of an instruction: the signal fed into the target wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// `123 -> x`: a constant signal.
    Const { value: Signal },

    /// `y -> x`: relay another wire's signal.
    Wire { source: WireId },

    /// `NOT x -> h`: bitwise complement, 16-bit wraparound.
    Not { input: WireId },

    /// `x AND y -> d` / `x OR y -> e`: gate over two wires.
    Binary { op: BinaryOp, lhs: WireId, rhs: WireId },

    /// `1 AND y -> d`: gate with a literal left operand.
    BinaryImm { op: BinaryOp, lhs: Signal, rhs: WireId },

    /// `x LSHIFT 2 -> f` / `y RSHIFT 2 -> g`: shift by a 0-15 bit amount.
    Shift { op: ShiftOp, input: WireId, amount: u8 },
}

/// One parsed line: an expression wired into a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub target: WireId,
    pub expr: Expression,
}

impl Instruction {
    pub fn new(target: WireId, expr: Expression) -> Self {
        Self { target, expr }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Const { value } => write!(f, "{}", value),
            Expression::Wire { source } => write!(f, "{}", source),
            Expression::Not { input } => write!(f, "NOT {}", input),
            Expression::Binary { op, lhs, rhs } => {
                write!(f, "{} {} {}", lhs, op.mnemonic(), rhs)
            }
            Expression::BinaryImm { op, lhs, rhs } => {
                write!(f, "{} {} {}", lhs, op.mnemonic(), rhs)
            }
            Expression::Shift { op, input, amount } => {
                write!(f, "{} {} {}", input, op.mnemonic(), amount)
            }
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.expr, self.target)
    }
}
