//! # Bitwire Parser
//!
//! Parse circuit description source into a [`Circuit`] of typed instructions.
//!
//! ## Example
//!
//! ```rust
//! use bitwire_parser::parse_circuit;
//!
//! let source = r#"
//!     123 -> x
//!     456 -> y
//!     x AND y -> d
//! "#;
//!
//! let circuit = parse_circuit(source).unwrap();
//! assert_eq!(circuit.len(), 3);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, Result};
pub use parser::parse_line;

use bitwire_spec::Circuit;
use std::collections::HashSet;

/// Parse a whole circuit description, one instruction per line.
///
/// Lines are numbered from 1. Blank lines and `#` comment lines are skipped.
/// The parse is fail-fast: the first malformed line aborts it. A wire defined
/// by two instructions is rejected here so that evaluation never has to pick
/// a winner.
pub fn parse_circuit(source: &str) -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let mut defined = HashSet::new();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let instruction = parse_line(line, line_number)?;
        if !defined.insert(instruction.target.clone()) {
            return Err(ParseError::DuplicateTarget {
                line: line_number,
                wire: instruction.target.to_string(),
            });
        }
        circuit.push(instruction);
    }

    Ok(circuit)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use bitwire_spec::Expression;
    use proptest::prelude::*;

    fn arb_wire_name() -> impl Strategy<Value = String> {
        "[a-z]{1,6}"
    }

    proptest! {
        #[test]
        fn test_any_const_line_parses(value in 0u16..=u16::MAX, name in arb_wire_name()) {
            let line = format!("{} -> {}", value, name);
            let instr = parse_line(&line, 1).unwrap();
            prop_assert_eq!(instr.target.as_str(), name.as_str());
            prop_assert_eq!(instr.expr, Expression::Const { value });
        }

        #[test]
        fn test_rendered_instruction_reparses(value in 0u16..=u16::MAX, name in arb_wire_name()) {
            // Display output is valid source text
            let instr = parse_line(&format!("{} -> {}", value, name), 1).unwrap();
            let reparsed = parse_line(&instr.to_string(), 1).unwrap();
            prop_assert_eq!(instr, reparsed);
        }

        #[test]
        fn test_out_of_range_literal_rejected(value in 65536u64..1_000_000u64) {
            let err = parse_line(&format!("{} -> x", value), 1).unwrap_err();
            prop_assert_eq!(err, ParseError::LiteralOutOfRange { line: 1, value });
        }
    }
}
