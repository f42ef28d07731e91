//! Fixed-point constraint propagation
//!
//! No topological sort: the solver just sweeps the instruction list in
//! rounds, resolving every wire whose operands are already known, until the
//! target resolves or a round makes no progress. Instruction order therefore
//! never affects the result, only how many rounds it takes.

use crate::error::{Result, SolveError};
use crate::eval::{eval, ResolvedWires};
use bitwire_spec::{Circuit, Signal, WireId};

/// Resolve `target` to its 16-bit signal.
///
/// Starts from an empty [`ResolvedWires`] map every call; nothing is cached
/// across calls, so patching the circuit between two solves is always safe.
/// Returns as soon as the target resolves rather than saturating the whole
/// circuit.
pub fn resolve(circuit: &Circuit, target: &WireId) -> Result<Signal> {
    let mut resolved = ResolvedWires::new();
    let mut round = 0usize;

    loop {
        let mut progressed = false;
        round += 1;

        for instruction in circuit {
            if resolved.contains_key(&instruction.target) {
                continue;
            }

            if let Some(value) = eval(&instruction.expr, &resolved) {
                tracing::trace!(wire = %instruction.target, value, "wire resolved");
                resolved.insert(instruction.target.clone(), value);
                progressed = true;
            }

            if let Some(value) = resolved.get(target) {
                return Ok(*value);
            }
        }

        if !progressed {
            return Err(SolveError::Unresolvable {
                wire: target.to_string(),
            });
        }

        tracing::debug!(round, resolved = resolved.len(), "propagation round complete");
    }
}

/// Solve once, feed the answer back into one wire, and solve again.
///
/// This is the patch-and-resolve protocol: `target` is resolved, the
/// instruction defining `feedback` is destructively replaced with the first
/// answer as a constant, and `target` is resolved again from scratch.
/// Returns `(first, second)`.
pub fn resolve_with_feedback(
    circuit: &mut Circuit,
    target: &WireId,
    feedback: &WireId,
) -> Result<(Signal, Signal)> {
    let first = resolve(circuit, target)?;
    circuit.patch(feedback, first)?;
    let second = resolve(circuit, target)?;
    Ok((first, second))
}
