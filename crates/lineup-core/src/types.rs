//! Common types used across lineup ordering.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved identifier used as the initial stack entry in sentinel seeding.
pub const SENTINEL: &str = "starter";

/// An unordered pair of performer identifiers.
///
/// Serialized as a two-element array, e.g. `["A", "B"]`. The order of the two
/// identifiers carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(pub String, pub String);

impl Edge {
    /// Create a new edge between two performers.
    pub fn new(u: impl Into<String>, v: impl Into<String>) -> Self {
        Self(u.into(), v.into())
    }

    /// Both endpoints, in input order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.0, &self.1)
    }

    /// Returns true if both endpoints are the same performer.
    pub fn is_self_loop(&self) -> bool {
        self.0 == self.1
    }

    /// The endpoints in lexicographic order, so `(A, B)` and `(B, A)` compare equal.
    pub fn normalized(&self) -> (&str, &str) {
        if self.0 <= self.1 {
            (&self.0, &self.1)
        } else {
            (&self.1, &self.0)
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Edge {
    fn from((u, v): (A, B)) -> Self {
        Edge::new(u, v)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.0, self.1)
    }
}

/// An ordered sequence of visited performers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    nodes: Vec<String>,
}

impl Trail {
    /// Wrap an already ordered sequence.
    pub fn new(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges walked (one less than the node count).
    pub fn moves(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Returns true if the trail walks at least one edge and ends where it started.
    pub fn is_circuit(&self) -> bool {
        self.moves() > 0 && self.first() == self.last()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.nodes
    }

    pub fn into_inner(self) -> Vec<String> {
        self.nodes
    }

    /// Returns true if the trail walks every edge of `edges` exactly once.
    ///
    /// Each consecutive pair of nodes must consume one unit of a matching
    /// input edge, and no unit may be left over. A self-loop step `A -> A`
    /// consumes one `(A, A)` edge.
    pub fn covers(&self, edges: &[Edge]) -> bool {
        let mut remaining: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        for edge in edges {
            *remaining.entry(edge.normalized()).or_insert(0) += 1;
        }

        for step in self.nodes.windows(2) {
            let key = if step[0] <= step[1] {
                (step[0].as_str(), step[1].as_str())
            } else {
                (step[1].as_str(), step[0].as_str())
            };
            match remaining.get_mut(&key) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        remaining.values().all(|count| *count == 0)
    }
}

impl From<Vec<String>> for Trail {
    fn from(nodes: Vec<String>) -> Self {
        Trail::new(nodes)
    }
}

impl From<Trail> for Vec<String> {
    fn from(trail: Trail) -> Self {
        trail.nodes
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}
