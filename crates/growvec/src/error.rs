//! Container error types.

use std::error::Error;
use std::fmt;

use crate::config::GrowthConfig;

/// Errors reported by [`GrowVec`](crate::GrowVec) operations and
/// [`GrowthConfig`](crate::GrowthConfig) validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrowVecError {
    /// An insertion index outside `[0, len)`. The container is unchanged.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A growth factor outside
    /// `[MIN_GROWTH_FACTOR, MAX_GROWTH_FACTOR]` of [`GrowthConfig`].
    InvalidGrowthFactor {
        /// The rejected factor.
        factor: usize,
    },
}

impl fmt::Display for GrowVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::InvalidGrowthFactor { factor } => {
                write!(
                    f,
                    "invalid growth factor {factor}: must be between {} and {}",
                    GrowthConfig::MIN_GROWTH_FACTOR,
                    GrowthConfig::MAX_GROWTH_FACTOR,
                )
            }
        }
    }
}

impl Error for GrowVecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_index_out_of_bounds() {
        let err = GrowVecError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");
    }

    #[test]
    fn display_invalid_growth_factor() {
        let err = GrowVecError::InvalidGrowthFactor { factor: 1 };
        assert_eq!(
            err.to_string(),
            "invalid growth factor 1: must be between 2 and 16"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn Error> =
            Box::new(GrowVecError::IndexOutOfBounds { index: 0, len: 0 });
        assert!(err.source().is_none());
    }
}
