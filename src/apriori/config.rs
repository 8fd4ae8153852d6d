use crate::error::{AprioriError, AprioriResult};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.01;

/// Settings for one Apriori run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AprioriConfig {
    pub min_support: f64,
    /// Count candidate occurrences on the rayon pool.
    pub parallel: bool,
    /// Drop candidates with an infrequent subset before scanning.
    pub subset_pruning: bool,
    /// Reject thresholds outside [0, 1] instead of mining a degenerate result.
    pub strict: bool,
}

impl Default for AprioriConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            parallel: true,
            subset_pruning: false,
            strict: false,
        }
    }
}

impl AprioriConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_subset_pruning(mut self, subset_pruning: bool) -> Self {
        self.subset_pruning = subset_pruning;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(&self) -> AprioriResult<()> {
        if self.strict && !(0.0..=1.0).contains(&self.min_support) {
            return Err(AprioriError::InvalidThreshold {
                min_support: self.min_support,
            });
        }
        Ok(())
    }
}
