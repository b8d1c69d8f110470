use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::Graph;
use crate::{Error, Result};

/// A computed route: the node sequence from start to end inclusive, and its
/// total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<N, W> {
    pub path: Vec<N>,
    pub cost: W,
}

/// Computes the least-cost route between two nodes.
///
/// Both endpoints are checked before any search work begins; an absent start
/// or end fails with [`Error::UnknownNode`]. An unreachable end is not an
/// error: it yields `Ok(None)`. When start equals end the route is the
/// single-node path with cost zero.
pub fn plan_route<N, W, G>(graph: &G, start: &N, end: &N) -> Result<Option<Route<N, W>>>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    if !graph.contains(start) {
        return Err(Error::UnknownNode(format!("{:?}", start)));
    }
    if !graph.contains(end) {
        return Err(Error::UnknownNode(format!("{:?}", end)));
    }

    let result = Dijkstra::new().compute_shortest_paths(graph, start)?;

    match (result.path_to(end), result.distance_to(end)) {
        (Some(path), Some(cost)) => Ok(Some(Route { path, cost })),
        _ => Ok(None),
    }
}

/// Computes routes for a batch of (start, end) pairs in parallel.
///
/// Each query owns its own heap and distance tables and only borrows the
/// graph immutably, so queries run on rayon's thread pool without locking.
/// Results are in the same order as `pairs`; the first structural error, if
/// any, fails the whole batch.
pub fn plan_routes<N, W, G>(graph: &G, pairs: &[(N, N)]) -> Result<Vec<Option<Route<N, W>>>>
where
    N: Eq + Hash + Clone + Debug + Send + Sync,
    W: Float + Zero + Debug + Copy + Ord + Send + Sync,
    G: Graph<N, W> + Sync,
{
    pairs
        .par_iter()
        .map(|(start, end)| plan_route(graph, start, end))
        .collect()
}
