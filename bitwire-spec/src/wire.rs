//! Wire identifiers
//!
//! A wire name is 1+ lowercase ASCII letters. Names are validated on
//! construction so every `WireId` in a circuit is well-formed by the time
//! the solver keys a map with it.

use crate::error::CircuitError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a wire in a circuit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WireId(String);

impl WireId {
    /// Create a wire identifier, validating the name.
    pub fn new(name: &str) -> Result<Self, CircuitError> {
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(CircuitError::InvalidWireName(name.to_string()));
        }
        Ok(WireId(name.to_string()))
    }

    /// The wire name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WireId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_lowercase_names_always_valid(name in "[a-z]{1,16}") {
            let wire = WireId::new(&name).unwrap();
            prop_assert_eq!(wire.as_str(), name.as_str());
        }

        #[test]
        fn test_names_with_other_chars_rejected(
            prefix in "[a-z]{0,4}",
            bad in "[A-Z0-9_>-]",
            suffix in "[a-z]{0,4}"
        ) {
            let name = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(WireId::new(&name).is_err());
        }
    }
}
