//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The request does not fit in the span left between the cursor and the
    /// far bound. Routine: it is how an allocation loop learns to stop.
    OutOfCapacity {
        /// Number of bytes requested (`elem_size * count`), saturated at
        /// `usize::MAX` if the product overflowed.
        requested: usize,
        /// Bytes left between the cursor and the far bound, before any
        /// alignment padding.
        remaining: usize,
    },
    /// `dealloc` was called with no outstanding allocations. The live count
    /// stays clamped at zero.
    Underflow,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfCapacity {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena out of capacity: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::Underflow => {
                write!(f, "dealloc called with no live allocations")
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_capacity() {
        let err = ArenaError::OutOfCapacity {
            requested: 44,
            remaining: 40,
        };
        assert_eq!(
            err.to_string(),
            "arena out of capacity: requested 44 bytes, 40 bytes remaining"
        );
    }

    #[test]
    fn display_underflow() {
        assert_eq!(
            ArenaError::Underflow.to_string(),
            "dealloc called with no live allocations"
        );
    }
}
