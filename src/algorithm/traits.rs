use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// Scoped to a single query: the tables are built fresh per call and never
/// shared between queries. A node absent from `distances` is unreachable from
/// the source (its distance is conceptually infinite).
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Best known distance from the source to each reached node
    pub distances: HashMap<N, W>,

    /// Predecessor of each reached node on its shortest path; the source has
    /// no entry
    pub predecessors: HashMap<N, N>,

    /// Source node of the query
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the distance from the source to `target`, if it was reached
    pub fn distance_to(&self, target: &N) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// Reconstructs the shortest path from the source to `target` by walking
    /// predecessor links backward, then reversing into source-to-target
    /// order.
    ///
    /// Returns `None` when `target` was never reached. A target equal to the
    /// source yields the single-node path.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.distances.contains_key(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            match self.predecessors.get(current) {
                Some(pred) => {
                    path.push(pred.clone());
                    current = pred;
                }
                None => return None,
            }
            // A predecessor chain longer than the table means a cycle, which
            // a correct relaxation can never produce.
            if path.len() > self.predecessors.len() + 1 {
                warn!("cycle in predecessor chain at {:?}", current);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all reachable nodes.
    ///
    /// Fails with [`Error::UnknownNode`](crate::Error::UnknownNode) if the
    /// source is absent from the graph.
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
