use serde::{Deserialize, Serialize};

/// Default bound on either wavefront's radius.
const DEFAULT_MAX_DEPTH: usize = 16;

/// Default cap on the number of paths enumerated per side and round.
const DEFAULT_LIMIT: usize = 10;

/// Configuration for the wavefront solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// The search stops once either side's radius reaches this value.
    ///
    /// Default: 16
    pub max_depth: usize,

    /// Per-round frontier cap passed to the path enumerator; 0 means uncapped.
    ///
    /// Default: 10
    pub limit: usize,
}

impl SolverConfig {
    /// Creates a configuration with explicit values.
    pub fn new(max_depth: usize, limit: usize) -> Self {
        Self { max_depth, limit }
    }

    /// Returns a builder starting from the defaults.
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::new()
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Builder for [`SolverConfig`].
///
/// # Example
///
/// ```
/// use spacetime::SolverConfig;
///
/// let config = SolverConfig::builder().max_depth(8).limit(100).build();
/// assert_eq!(config.max_depth, 8);
/// ```
pub struct SolverConfigBuilder {
    max_depth: usize,
    limit: usize,
}

impl SolverConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the radius at which the search stops.
    ///
    /// Depths start at 1, so a value of 1 or less runs no rounds.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the per-round path cap.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Removes the per-round path cap.
    ///
    /// This is equivalent to `.limit(0)`. Enumeration cost then grows with the
    /// branching factor raised to the depth.
    #[must_use]
    pub fn uncapped(mut self) -> Self {
        self.limit = 0;
        self
    }

    /// Finishes the configuration.
    pub fn build(self) -> SolverConfig {
        SolverConfig {
            max_depth: self.max_depth,
            limit: self.limit,
        }
    }
}

impl Default for SolverConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
