//! # Bitwire Solver
//!
//! Resolve a named wire's 16-bit signal by iterative constraint propagation
//! over the circuit's implicit dependency graph.
//!
//! [`resolve`] is a pure function of the circuit and the target wire: it
//! builds its resolved-wire map from scratch every call and performs no I/O,
//! so the caller may freely mutate the circuit between calls.
//!
//! ## Patch-and-resolve
//!
//! The two-phase workflow feeds one solve's answer back into the circuit
//! before a second solve:
//!
//! ```rust
//! use bitwire_parser::parse_circuit;
//! use bitwire_solver::resolve;
//! use bitwire_spec::WireId;
//!
//! let mut circuit = parse_circuit("5 -> b\nb LSHIFT 1 -> a").unwrap();
//! let a = WireId::new("a").unwrap();
//! let b = WireId::new("b").unwrap();
//!
//! let first = resolve(&circuit, &a).unwrap();
//! circuit.patch(&b, first).unwrap();
//! let second = resolve(&circuit, &a).unwrap();
//!
//! assert_eq!((first, second), (10, 20));
//! ```
//!
//! [`resolve_with_feedback`] packages exactly this sequence.

pub mod error;
pub mod eval;
pub mod solve;

pub use error::{Result, SolveError};
pub use eval::ResolvedWires;
pub use solve::{resolve, resolve_with_feedback};
