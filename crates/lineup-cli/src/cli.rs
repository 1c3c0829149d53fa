//! # Lineup CLI
use clap::{Parser, ValueEnum};
use lineup_planner::{SeedStrategy, TrailConfig};
use std::path::PathBuf;

/// Prints a performance order for a list of back-to-back performer pairs.
///
/// The input is a JSON array of two-element arrays, e.g. `[["A","B"],["B","C"]]`.
#[derive(Debug, Parser)]
#[command(author, version, about = "Festival lineup ordering", long_about = None)]
pub struct Args {
    /// The edge list file. Reads stdin when omitted.
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// A JSON configuration file for the trail builder.
    ///
    /// Command-line flags override values from the file.
    #[arg(long, value_name = "CONFIG", env = "LINEUP_CONFIG")]
    pub config: Option<PathBuf>,
    /// Where traversal starts.
    #[arg(long, value_enum, value_name = "SEED")]
    pub seed: Option<Seed>,
    /// Reject inputs that cannot produce a complete order.
    #[arg(long)]
    pub validate: bool,
    /// Maximum number of edges to accept. Zero means unlimited.
    #[arg(long, value_name = "COUNT")]
    pub max_edges: Option<usize>,
    /// Pretty-print the resulting order.
    #[arg(long)]
    pub pretty: bool,
}

/// Seeding strategy as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Seed {
    /// Start from the reserved `starter` node.
    Sentinel,
    /// Start from the smallest odd-degree node.
    OddDegree,
}

impl From<Seed> for SeedStrategy {
    fn from(seed: Seed) -> Self {
        match seed {
            Seed::Sentinel => SeedStrategy::Sentinel,
            Seed::OddDegree => SeedStrategy::OddDegree,
        }
    }
}

impl Args {
    /// Apply command-line overrides on top of `config`.
    pub fn merge_into(&self, mut config: TrailConfig) -> TrailConfig {
        if let Some(seed) = self.seed {
            config.seed = seed.into();
        }
        if self.validate {
            config.validate = true;
        }
        if let Some(max_edges) = self.max_edges {
            config.max_edges = max_edges;
        }
        config
    }
}
