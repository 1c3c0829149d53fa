//! Opt-in checks that an input can produce a complete trail.

use lineup_core::{Edge, LineupError, Multigraph, Result, SENTINEL};
use tracing::debug;

use crate::planner::SeedStrategy;

/// Reject inputs that cannot be walked end to end from the chosen root.
///
/// Runs before any traversal. Checks, in order: empty identifiers, the
/// odd-degree count, connectivity of edge-bearing nodes, and finally whether
/// the sentinel can start a complete trail when `seed` is
/// [`SeedStrategy::Sentinel`].
pub fn validate(edges: &[Edge], graph: &Multigraph, seed: SeedStrategy) -> Result<()> {
    if let Some(index) = edges
        .iter()
        .position(|edge| edge.0.is_empty() || edge.1.is_empty())
    {
        return Err(LineupError::EmptyIdentifier { index });
    }

    if graph.is_empty() {
        return Ok(());
    }

    let odd_nodes = graph.odd_degree_nodes();
    if !matches!(odd_nodes.len(), 0 | 2) {
        debug!("Rejecting graph with {} odd-degree nodes", odd_nodes.len());
        return Err(LineupError::NotEulerian {
            odd_nodes: to_owned(&odd_nodes),
        });
    }

    let nodes = graph.nodes();
    if let Some(start) = nodes.iter().find(|node| graph.has_edges(node)) {
        let unreachable = graph.unreachable_from(start);
        if !unreachable.is_empty() {
            return Err(LineupError::Disconnected {
                unreachable: to_owned(&unreachable),
            });
        }
    }

    if seed == SeedStrategy::Sentinel {
        if !graph.has_edges(SENTINEL) {
            return Err(LineupError::SentinelDetached {
                sentinel: SENTINEL.to_string(),
            });
        }
        if odd_nodes.len() == 2 && !odd_nodes.contains(&SENTINEL) {
            return Err(LineupError::NotEulerian {
                odd_nodes: to_owned(&odd_nodes),
            });
        }
    }

    Ok(())
}

fn to_owned(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|node| node.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pairs: &[(&str, &str)], seed: SeedStrategy) -> Result<()> {
        let edges: Vec<Edge> = pairs.iter().map(|&(u, v)| Edge::new(u, v)).collect();
        let graph = Multigraph::from_edges(&edges);
        validate(&edges, &graph, seed)
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(check(&[], SeedStrategy::Sentinel).is_ok());
        assert!(check(&[], SeedStrategy::OddDegree).is_ok());
    }

    #[test]
    fn test_rejects_empty_identifier() {
        let result = check(&[("A", "B"), ("B", "")], SeedStrategy::OddDegree);
        assert_eq!(result, Err(LineupError::EmptyIdentifier { index: 1 }));
    }

    #[test]
    fn test_rejects_too_many_odd_nodes() {
        // Star with three leaves: A, B, C and the hub all have odd degree.
        let result = check(&[("H", "A"), ("H", "B"), ("H", "C")], SeedStrategy::OddDegree);
        assert_eq!(
            result,
            Err(LineupError::NotEulerian {
                odd_nodes: vec!["A".into(), "B".into(), "C".into(), "H".into()],
            })
        );
    }

    #[test]
    fn test_rejects_disconnected() {
        let result = check(
            &[("A", "B"), ("B", "A"), ("C", "D"), ("D", "C")],
            SeedStrategy::OddDegree,
        );
        assert_eq!(
            result,
            Err(LineupError::Disconnected {
                unreachable: vec!["C".into(), "D".into()],
            })
        );
    }

    #[test]
    fn test_sentinel_detached() {
        let cycle = [("A", "B"), ("B", "C"), ("C", "A")];
        assert!(check(&cycle, SeedStrategy::OddDegree).is_ok());
        assert_eq!(
            check(&cycle, SeedStrategy::Sentinel),
            Err(LineupError::SentinelDetached {
                sentinel: "starter".into(),
            })
        );
    }

    #[test]
    fn test_sentinel_must_be_odd_endpoint() {
        let path = [("starter", "A"), ("A", "B")];
        assert!(check(&path, SeedStrategy::Sentinel).is_ok());

        let wrong_end = [("A", "starter"), ("starter", "B"), ("B", "C")];
        assert_eq!(
            check(&wrong_end, SeedStrategy::Sentinel),
            Err(LineupError::NotEulerian {
                odd_nodes: vec!["A".into(), "C".into()],
            })
        );
    }
}
