//! Reading edge lists and configuration.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::Context;
use lineup_core::{Edge, Result};
use lineup_planner::TrailConfig;

/// Parse a JSON edge list such as `[["A","B"],["B","C"]]`.
pub fn parse_edges<R: Read>(reader: R) -> Result<Vec<Edge>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a JSON trail builder configuration.
pub fn parse_config<R: Read>(reader: R) -> Result<TrailConfig> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read edges from `path`, or stdin when no path is given.
pub fn read_edges(path: Option<&Path>) -> anyhow::Result<Vec<Edge>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open edge list {}", path.display()))?;
            parse_edges(BufReader::new(file))
                .with_context(|| format!("failed to parse edge list {}", path.display()))
        }
        None => parse_edges(io::stdin().lock()).context("failed to parse edge list from stdin"),
    }
}

/// Load the configuration file, falling back to defaults when none is given.
pub fn read_config(path: Option<&Path>) -> anyhow::Result<TrailConfig> {
    let Some(path) = path else {
        return Ok(TrailConfig::default());
    };
    let file =
        File::open(path).with_context(|| format!("failed to open config {}", path.display()))?;
    parse_config(BufReader::new(file))
        .with_context(|| format!("failed to parse config {}", path.display()))
}
