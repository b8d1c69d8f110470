use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm with lazy deletion of stale queue entries.
///
/// Relaxation pushes a fresh heap entry whenever a node's distance improves,
/// leaving the superseded entry in place; the main loop discards entries for
/// already-settled nodes on pop. This keeps the heap contract to push and pop
/// only, trading queue size for the complexity of decrease-key.
///
/// Precondition: all edge weights are non-negative. The algorithm does not
/// check this; see `UndirectedGraph::validate_non_negative`.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.contains(source) {
            return Err(Error::UnknownNode(format!("{:?}", source)));
        }

        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, N> = HashMap::new();
        let mut visited: HashSet<N> = HashSet::new();

        distances.insert(source.clone(), W::zero());

        let mut heap: MinHeap<W, N> = MinHeap::new();
        heap.push(W::zero(), source.clone());

        while let Some((dist_u, u)) = heap.pop() {
            // Stale entry for an already-settled node
            if !visited.insert(u.clone()) {
                continue;
            }
            trace!("settled {:?} at distance {:?}", u, dist_u);

            // Relax all edges out of u
            for (v, weight) in graph.neighbors(&u)? {
                let candidate = dist_u + weight;

                let improves = match distances.get(&v) {
                    None => true,
                    Some(current) => candidate < *current,
                };

                if improves {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), u.clone());
                    heap.push(candidate, v);
                }
            }
        }

        debug!(
            "dijkstra from {:?}: settled {} of {} nodes",
            source,
            visited.len(),
            graph.node_count()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
