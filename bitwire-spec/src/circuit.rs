//! Circuit structure
//!
//! An ordered collection of instructions, one per target wire. The order is
//! source-line order; resolution does not depend on it, but diagnostics do.
//!
//! The circuit is the mutable half of the patch-and-resolve protocol: after a
//! first solve, [`Circuit::patch`] overwrites one wire's defining expression
//! with a constant so a second solve sees the fed-back value.

use crate::error::CircuitError;
use crate::instruction::{Expression, Instruction};
use crate::wire::WireId;
use crate::Signal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered set of wire instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Append an instruction, keeping source order.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Iterate instructions in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// The instruction defining `wire`, if any.
    pub fn instruction_for(&self, wire: &WireId) -> Option<&Instruction> {
        self.instructions.iter().find(|i| &i.target == wire)
    }

    /// Replace `wire`'s defining expression with a constant signal.
    ///
    /// This is the destructive step between the two solves of the
    /// patch-and-resolve workflow. Fails if no instruction targets `wire`.
    pub fn patch(&mut self, wire: &WireId, value: Signal) -> Result<(), CircuitError> {
        let instr = self
            .instructions
            .iter_mut()
            .find(|i| &i.target == wire)
            .ok_or_else(|| CircuitError::UnknownWire(wire.to_string()))?;
        instr.expr = Expression::Const { value };
        Ok(())
    }
}

impl From<Vec<Instruction>> for Circuit {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl fmt::Display for Circuit {
    /// Render the circuit back to source text, one instruction per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
