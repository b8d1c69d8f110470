//! citypath - least-cost routing over traffic-weighted road networks
//!
//! This library computes shortest paths on weighted, undirected graphs that
//! model a city road network. Edge weights are opaque non-negative costs,
//! typically derived upstream from distance scaled by a traffic multiplier.
//!
//! The crate provides the graph representation, an array-backed binary
//! min-heap priority queue, and Dijkstra's algorithm with lazy deletion of
//! stale queue entries. Loading road data from external records, persisting
//! graphs, and rendering routes are the caller's responsibility.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    route::{plan_route, plan_routes, Route},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
