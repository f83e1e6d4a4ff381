//! Block-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during block operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockError {
    /// A requested or combined length exceeds the largest supported block.
    CapacityExceeded {
        /// Number of elements requested.
        requested: u128,
        /// Largest supported block length in elements.
        max: usize,
    },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "block capacity exceeded: requested {requested} elements, maximum {max}"
                )
            }
        }
    }
}

impl Error for BlockError {}
