//! Error types for the circuit data model

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    #[error("Invalid wire name `{0}` (wire names are 1+ lowercase ASCII letters)")]
    InvalidWireName(String),

    #[error("No instruction defines wire `{0}`")]
    UnknownWire(String),
}

pub type Result<T> = std::result::Result<T, CircuitError>;
