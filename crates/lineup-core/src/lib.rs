//! # Lineup Core
//!
//! Core primitives for festival lineup ordering.
//!
//! This crate provides the fundamental building blocks:
//! - [`Edge`] - Unordered pair of performers that must play back to back
//! - [`Trail`] - The resulting performance order
//! - [`Multigraph`] - Undirected multigraph with sorted neighbor iteration
//! - [`LineupError`] - Error types

pub mod error;
pub mod graph;
pub mod types;

// Re-exports for convenience
pub use error::{LineupError, Result};
pub use graph::Multigraph;
pub use types::{Edge, Trail, SENTINEL};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{LineupError, Result};
    pub use crate::graph::Multigraph;
    pub use crate::types::{Edge, Trail, SENTINEL};
}
