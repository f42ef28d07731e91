//! Solver error types

use bitwire_spec::CircuitError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A full propagation round resolved nothing new while the target wire
    /// was still unknown: a missing definition, a cycle, or a typo.
    #[error("Wire `{wire}` cannot be resolved")]
    Unresolvable { wire: String },

    #[error("Circuit error: {0}")]
    Circuit(#[from] CircuitError),
}

pub type Result<T> = std::result::Result<T, SolveError>;
