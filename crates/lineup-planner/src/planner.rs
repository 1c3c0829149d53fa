//! Planner trait and configuration.

use lineup_core::{Edge, LineupError, Result, Trail};
use serde::{Deserialize, Serialize};

/// How the traversal stack is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedStrategy {
    /// Start from the reserved `"starter"` node.
    ///
    /// Unless an input edge references `"starter"`, the sentinel is isolated
    /// and the resulting order is just `["starter"]`.
    #[default]
    Sentinel,
    /// Start from the lexicographically smallest odd-degree node, or the
    /// smallest node overall when every degree is even.
    OddDegree,
}

/// Configuration for the trail builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Where traversal starts.
    pub seed: SeedStrategy,

    /// Reject inputs that cannot produce a complete trail before traversing.
    pub validate: bool,

    /// Maximum number of input edges accepted. Zero means unlimited.
    pub max_edges: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            seed: SeedStrategy::Sentinel,
            validate: false,
            max_edges: 0,
        }
    }
}

impl TrailConfig {
    /// Set the seeding strategy.
    pub fn with_seed(mut self, seed: SeedStrategy) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable pre-traversal validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Cap the number of accepted edges.
    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.max_edges = max_edges;
        self
    }

    /// Check the edge count against `max_edges`.
    pub fn check_limit(&self, count: usize) -> Result<()> {
        if self.max_edges > 0 && count > self.max_edges {
            return Err(LineupError::TooManyEdges {
                count,
                limit: self.max_edges,
            });
        }
        Ok(())
    }
}

/// Trait for performance order planners.
pub trait OrderPlanner: Send + Sync {
    /// Produce a performance order for the given edges.
    fn plan(&self, edges: &[Edge]) -> Result<Trail>;

    /// Get the planner configuration.
    fn config(&self) -> &TrailConfig;

    /// Update the planner configuration.
    fn set_config(&mut self, config: TrailConfig);
}

/// Result of a traversal with additional metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailReport {
    /// The constructed order.
    pub trail: Trail,

    /// Node the traversal started from, if any.
    pub root: Option<String>,

    /// Number of input edges.
    pub edges_total: usize,

    /// Edges the traversal never reached.
    pub edges_unused: usize,
}

impl TrailReport {
    /// Returns true if every input edge was walked.
    pub fn is_complete(&self) -> bool {
        self.edges_unused == 0
    }
}
