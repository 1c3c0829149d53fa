//! Iterative Hierholzer trail construction.

use lineup_core::{Edge, Multigraph, Result, Trail, SENTINEL};
use tracing::{debug, info, warn};

use crate::planner::{OrderPlanner, SeedStrategy, TrailConfig, TrailReport};
use crate::validate::validate;

/// Builds performance orders by walking every edge of an undirected multigraph.
///
/// At each step the traversal follows the lexicographically smallest
/// neighbor that still has an edge unit left, consuming it. A node is only
/// emitted once all its edges are exhausted, and the emitted sequence is
/// reversed at the end. The stack is explicit, so deep graphs never recurse.
///
/// With the default [`SeedStrategy::Sentinel`], traversal starts at
/// `"starter"`. No real input references that node unless the caller wires it
/// in, so the result is usually the one-element order `["starter"]`. Use
/// [`SeedStrategy::OddDegree`] to start from a node that is actually in the
/// graph.
#[derive(Debug, Clone, Default)]
pub struct TrailBuilder {
    config: TrailConfig,
}

impl TrailBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: TrailConfig::default(),
        }
    }

    /// Create a new builder with custom configuration.
    pub fn with_config(config: TrailConfig) -> Self {
        Self { config }
    }

    /// Build the multigraph for `edges`.
    pub fn build_graph(&self, edges: &[Edge]) -> Multigraph {
        Multigraph::from_edges(edges)
    }

    /// Pick the node traversal starts from, or `None` when there is nothing to walk.
    pub fn root(&self, graph: &Multigraph) -> Option<String> {
        match self.config.seed {
            SeedStrategy::Sentinel => Some(SENTINEL.to_string()),
            SeedStrategy::OddDegree => graph
                .odd_degree_nodes()
                .first()
                .copied()
                .or_else(|| {
                    graph
                        .nodes()
                        .into_iter()
                        .find(|node| graph.has_edges(node))
                })
                .map(str::to_string),
        }
    }

    /// Compute the performance order for `edges`.
    pub fn find_performance_order(&self, edges: &[Edge]) -> Result<Trail> {
        self.run(edges).map(|report| report.trail)
    }

    /// Compute the performance order along with traversal metadata.
    pub fn run(&self, edges: &[Edge]) -> Result<TrailReport> {
        self.config.check_limit(edges.len())?;

        info!(
            "Building performance order for {} edges ({:?} seed)",
            edges.len(),
            self.config.seed
        );

        let mut graph = self.build_graph(edges);

        if self.config.validate {
            validate(edges, &graph, self.config.seed)?;
        }

        let root = self.root(&graph);
        let trail = match &root {
            Some(root) => {
                if self.config.seed == SeedStrategy::Sentinel
                    && !graph.has_edges(root)
                    && !graph.is_empty()
                {
                    warn!(
                        "Sentinel root '{}' is not connected to any edge; order will be trivial",
                        root
                    );
                }
                debug!("Starting traversal at '{}'", root);
                traverse(&mut graph, root.clone())
            }
            None => Trail::default(),
        };

        let edges_unused = graph.remaining_edges();
        if edges_unused > 0 {
            warn!(
                "Performance order left {} of {} edges unused",
                edges_unused,
                edges.len()
            );
        }

        info!("Performance order has {} entries", trail.len());

        Ok(TrailReport {
            trail,
            root,
            edges_total: edges.len(),
            edges_unused,
        })
    }
}

impl OrderPlanner for TrailBuilder {
    fn plan(&self, edges: &[Edge]) -> Result<Trail> {
        self.find_performance_order(edges)
    }

    fn config(&self) -> &TrailConfig {
        &self.config
    }

    fn set_config(&mut self, config: TrailConfig) {
        self.config = config;
    }
}

/// Reference ordering: sentinel seed, no validation, never fails.
pub fn find_performance_order(edges: &[Edge]) -> Vec<String> {
    let mut graph = Multigraph::from_edges(edges);
    traverse(&mut graph, SENTINEL.to_string()).into_inner()
}

/// Walk `graph` from `root`, consuming edges, and return the reversed post-order.
fn traverse(graph: &mut Multigraph, root: String) -> Trail {
    let mut stack = vec![root];
    let mut path = Vec::new();

    while let Some(current) = stack.last() {
        match graph.smallest_neighbor(current).map(str::to_string) {
            Some(next) => {
                graph.consume_edge(current, &next);
                stack.push(next);
            }
            None => {
                if let Some(done) = stack.pop() {
                    path.push(done);
                }
            }
        }
    }

    path.reverse();
    Trail::new(path)
}
