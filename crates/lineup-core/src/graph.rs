//! Undirected multigraph with sorted neighbor iteration.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use crate::types::Edge;

/// Undirected multigraph keyed by performer identifier.
///
/// Each node maps to its neighbors in lexicographic order, together with the
/// number of edge units still available between the two. The count stored
/// for `v` under `u` always equals the count stored for `u` under `v`; the
/// only mutators ([`Multigraph::add_edge`] and [`Multigraph::consume_edge`])
/// update both sides together.
///
/// A self-loop `(u, u)` is stored as two units under `u -> u`, and a single
/// [`Multigraph::consume_edge`] call removes both of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multigraph {
    adjacency: HashMap<String, BTreeMap<String, usize>>,
}

impl Multigraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from every edge in `edges`.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.0, &edge.1);
        }
        graph
    }

    /// Add one unit of the edge `(u, v)`.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        self.increment(u, v);
        self.increment(v, u);
    }

    fn increment(&mut self, from: &str, to: &str) {
        let neighbors = self.adjacency.entry(from.to_string()).or_default();
        *neighbors.entry(to.to_string()).or_insert(0) += 1;
    }

    /// Consume one unit of the edge `(u, v)` from both sides.
    ///
    /// Entries that reach zero are removed, so [`Multigraph::has_edges`] only
    /// needs to look at emptiness. Consuming an edge that does not exist is a
    /// no-op; the return value reports whether anything was removed.
    pub fn consume_edge(&mut self, u: &str, v: &str) -> bool {
        let forward = self.decrement(u, v);
        let backward = self.decrement(v, u);
        forward || backward
    }

    fn decrement(&mut self, from: &str, to: &str) -> bool {
        let Some(neighbors) = self.adjacency.get_mut(from) else {
            return false;
        };
        let exhausted = match neighbors.get_mut(to) {
            Some(count) => {
                *count -= 1;
                *count == 0
            }
            None => return false,
        };
        if exhausted {
            neighbors.remove(to);
        }
        true
    }

    /// The lexicographically smallest neighbor of `node` with edges remaining.
    pub fn smallest_neighbor(&self, node: &str) -> Option<&str> {
        self.adjacency
            .get(node)
            .and_then(|neighbors| neighbors.keys().next())
            .map(String::as_str)
    }

    /// Returns true if `node` has at least one remaining edge.
    pub fn has_edges(&self, node: &str) -> bool {
        self.adjacency
            .get(node)
            .is_some_and(|neighbors| !neighbors.is_empty())
    }

    /// Remaining units between `u` and `v`, as stored under `u`.
    pub fn multiplicity(&self, u: &str, v: &str) -> usize {
        self.adjacency
            .get(u)
            .and_then(|neighbors| neighbors.get(v))
            .copied()
            .unwrap_or(0)
    }

    /// Number of remaining edge endpoints at `node`. Self-loops count twice.
    pub fn degree(&self, node: &str) -> usize {
        self.adjacency
            .get(node)
            .map(|neighbors| neighbors.values().sum())
            .unwrap_or(0)
    }

    /// Every node ever added, in lexicographic order.
    pub fn nodes(&self) -> Vec<&str> {
        let sorted: BTreeSet<&str> = self.adjacency.keys().map(String::as_str).collect();
        sorted.into_iter().collect()
    }

    /// Nodes with remaining edges and an odd degree, in lexicographic order.
    pub fn odd_degree_nodes(&self) -> Vec<&str> {
        self.nodes()
            .into_iter()
            .filter(|node| self.degree(node) % 2 == 1)
            .collect()
    }

    /// Number of edges still available.
    ///
    /// Every non-loop edge is stored twice and every self-loop as two units
    /// under one entry, so the endpoint total is always even.
    pub fn remaining_edges(&self) -> usize {
        let endpoints: usize = self
            .adjacency
            .values()
            .flat_map(|neighbors| neighbors.values())
            .sum();
        endpoints / 2
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_edges() == 0
    }

    /// Nodes with remaining edges that cannot be reached from `start`, sorted.
    pub fn unreachable_from(&self, start: &str) -> Vec<&str> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        if let Some((key, _)) = self.adjacency.get_key_value(start) {
            seen.insert(key.as_str());
            queue.push_back(key.as_str());
        }

        while let Some(current) = queue.pop_front() {
            if let Some(neighbors) = self.adjacency.get(current) {
                for next in neighbors.keys() {
                    if seen.insert(next.as_str()) {
                        queue.push_back(next.as_str());
                    }
                }
            }
        }

        self.nodes()
            .into_iter()
            .filter(|node| self.has_edges(node) && !seen.contains(node))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs.iter().map(|&(u, v)| Edge::new(u, v)).collect()
    }

    #[test]
    fn test_build_is_symmetric() {
        let graph = Multigraph::from_edges(&edges(&[("A", "B"), ("B", "C"), ("B", "A")]));

        assert_eq!(graph.multiplicity("A", "B"), 2);
        assert_eq!(graph.multiplicity("B", "A"), 2);
        assert_eq!(graph.multiplicity("C", "B"), 1);
        assert_eq!(graph.multiplicity("A", "C"), 0);
        assert_eq!(graph.remaining_edges(), 3);
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let graph = Multigraph::from_edges(&edges(&[("A", "A")]));

        assert_eq!(graph.multiplicity("A", "A"), 2);
        assert_eq!(graph.degree("A"), 2);
        assert_eq!(graph.remaining_edges(), 1);
        assert!(graph.odd_degree_nodes().is_empty());
    }

    #[test]
    fn test_consume_removes_empty_entries() {
        let mut graph = Multigraph::from_edges(&edges(&[("A", "B"), ("A", "B")]));

        assert!(graph.consume_edge("B", "A"));
        assert_eq!(graph.multiplicity("A", "B"), 1);
        assert_eq!(graph.multiplicity("B", "A"), 1);

        assert!(graph.consume_edge("A", "B"));
        assert!(!graph.has_edges("A"));
        assert!(!graph.has_edges("B"));
        assert!(graph.is_empty());
        // Nodes stay known after their edges are gone.
        assert_eq!(graph.nodes(), vec!["A", "B"]);
    }

    #[test]
    fn test_consume_self_loop_in_one_step() {
        let mut graph = Multigraph::from_edges(&edges(&[("A", "A"), ("A", "A")]));
        assert_eq!(graph.multiplicity("A", "A"), 4);

        assert!(graph.consume_edge("A", "A"));
        assert_eq!(graph.multiplicity("A", "A"), 2);
        assert!(graph.consume_edge("A", "A"));
        assert!(!graph.has_edges("A"));
    }

    #[test]
    fn test_consume_missing_edge_is_noop() {
        let mut graph = Multigraph::from_edges(&edges(&[("A", "B")]));
        let before = graph.clone();

        assert!(!graph.consume_edge("A", "C"));
        assert!(!graph.consume_edge("X", "Y"));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_smallest_neighbor_is_lexicographic() {
        let graph = Multigraph::from_edges(&edges(&[("m", "b"), ("m", "a"), ("m", "B")]));

        // Uppercase sorts before lowercase.
        assert_eq!(graph.smallest_neighbor("m"), Some("B"));
        assert_eq!(graph.smallest_neighbor("zz"), None);
    }

    #[test]
    fn test_odd_degree_nodes() {
        let graph = Multigraph::from_edges(&edges(&[("A", "B"), ("B", "C")]));
        assert_eq!(graph.odd_degree_nodes(), vec!["A", "C"]);
        assert_eq!(graph.degree("B"), 2);
    }

    #[test]
    fn test_unreachable_from() {
        let graph = Multigraph::from_edges(&edges(&[("A", "B"), ("C", "D")]));
        assert_eq!(graph.unreachable_from("A"), vec!["C", "D"]);
        assert_eq!(graph.unreachable_from("nowhere"), vec!["A", "B", "C", "D"]);

        let connected = Multigraph::from_edges(&edges(&[("A", "B"), ("B", "C")]));
        assert!(connected.unreachable_from("C").is_empty());
    }
}
