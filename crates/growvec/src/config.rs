//! Growth configuration parameters.

use crate::error::GrowVecError;

/// Configuration for a [`GrowVec`](crate::GrowVec)'s storage policy.
///
/// Validated when passed to a constructor; immutable for the lifetime of
/// the container afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 0 (no allocation until the first append).
    pub initial_capacity: usize,

    /// Multiplier applied to the required length when the buffer overflows.
    ///
    /// Default: 2. On overflow the new capacity is
    /// `growth_factor * (len + additional)`. Must lie in
    /// `[MIN_GROWTH_FACTOR, MAX_GROWTH_FACTOR]`.
    pub growth_factor: usize,
}

impl GrowthConfig {
    /// Default growth factor: capacity doubles relative to demand.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Smallest factor that still amortizes appends to O(1).
    pub const MIN_GROWTH_FACTOR: usize = 2;

    /// Largest accepted factor. Larger factors overflow the capacity
    /// computation on the first growth for any realistic length.
    pub const MAX_GROWTH_FACTOR: usize = 16;

    /// Create a config with no initial allocation and the default factor.
    pub fn new() -> Self {
        Self {
            initial_capacity: 0,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Set the number of slots allocated at construction.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the growth factor.
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check that the config describes a usable policy.
    pub fn validate(&self) -> Result<(), GrowVecError> {
        let allowed = Self::MIN_GROWTH_FACTOR..=Self::MAX_GROWTH_FACTOR;
        if !allowed.contains(&self.growth_factor) {
            return Err(GrowVecError::InvalidGrowthFactor {
                factor: self.growth_factor,
            });
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new()
    }
}
