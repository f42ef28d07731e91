//! # Bitwire Circuit Specification
//!
//! Core types for the bitwire circuit description language: a small
//! declarative language in which each line connects a 16-bit signal to a
//! named wire, either directly or through a bitwise gate.
//!
//! ## Statement shapes
//! - `123 -> x` (constant input)
//! - `y -> x` (wire relay)
//! - `NOT x -> h` (complement)
//! - `x AND y -> d`, `x OR y -> e` (binary gates)
//! - `1 AND y -> d` (binary gate with a literal left operand)
//! - `x LSHIFT 2 -> f`, `y RSHIFT 2 -> g` (shifts by 0-15 bits)
//!
//! A wire is defined by at most one instruction. All arithmetic is unsigned
//! 16-bit: complements wrap, shifted-out bits are discarded.

pub mod circuit;
pub mod error;
pub mod instruction;
pub mod wire;

pub use circuit::Circuit;
pub use error::CircuitError;
pub use instruction::{BinaryOp, Expression, Instruction, ShiftOp};
pub use wire::WireId;

/// Value carried by a wire (unsigned 16-bit).
pub type Signal = u16;

/// Width of a signal in bits.
pub const SIGNAL_BITS: u8 = 16;

/// Largest legal shift amount (shifting a 16-bit signal by 16+ bits always
/// yields zero and is rejected at parse time).
pub const MAX_SHIFT: u8 = 15;
