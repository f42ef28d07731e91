//! Integration tests for the bitwire parser
//!
//! Parse each statement shape from source text and check the typed
//! instruction field by field.

use bitwire_parser::parse_circuit;
use bitwire_spec::{BinaryOp, Expression, ShiftOp, WireId};

fn wire(name: &str) -> WireId {
    WireId::new(name).unwrap()
}

#[test]
fn test_all_six_shapes() {
    let source = r#"
        123 -> x
        y -> w
        NOT x -> h
        x AND y -> d
        1 OR y -> e
        x LSHIFT 2 -> f
    "#;

    let circuit = parse_circuit(source).unwrap();
    assert_eq!(circuit.len(), 6);

    let exprs: Vec<_> = circuit.iter().map(|i| i.expr.clone()).collect();
    assert_eq!(exprs[0], Expression::Const { value: 123 });
    assert_eq!(exprs[1], Expression::Wire { source: wire("y") });
    assert_eq!(exprs[2], Expression::Not { input: wire("x") });
    assert_eq!(
        exprs[3],
        Expression::Binary {
            op: BinaryOp::And,
            lhs: wire("x"),
            rhs: wire("y"),
        }
    );
    assert_eq!(
        exprs[4],
        Expression::BinaryImm {
            op: BinaryOp::Or,
            lhs: 1,
            rhs: wire("y"),
        }
    );
    assert_eq!(
        exprs[5],
        Expression::Shift {
            op: ShiftOp::Lshift,
            input: wire("x"),
            amount: 2,
        }
    );
}

#[test]
fn test_multi_letter_wire_names() {
    let circuit = parse_circuit("lx AND ly -> lz").unwrap();
    let instr = circuit.instruction_for(&wire("lz")).unwrap();
    assert_eq!(
        instr.expr,
        Expression::Binary {
            op: BinaryOp::And,
            lhs: wire("lx"),
            rhs: wire("ly"),
        }
    );
}

#[test]
fn test_parsed_circuit_renders_back_to_source() {
    let source = "123 -> x\nNOT x -> h\nx LSHIFT 2 -> f\n";
    let circuit = parse_circuit(source).unwrap();
    assert_eq!(circuit.to_string(), source);
}

#[test]
fn test_whitespace_runs_between_tokens() {
    let circuit = parse_circuit("  123\t ->   x  ").unwrap();
    assert_eq!(circuit.len(), 1);
}
