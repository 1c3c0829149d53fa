//! # Lineup Planner
//!
//! Deterministic Eulerian trail construction for festival lineup ordering.

pub mod hierholzer;
pub mod planner;
pub mod validate;

pub use hierholzer::{find_performance_order, TrailBuilder};
pub use planner::{OrderPlanner, SeedStrategy, TrailConfig, TrailReport};
pub use validate::validate;
