use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, ToPrimitive, Zero};

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// An undirected graph backed by a nested adjacency map.
///
/// Each node maps to its neighbors and the weight of the connecting edge.
/// Invariant: if `adjacency[u]` contains `v` with weight `w`, then
/// `adjacency[v]` contains `u` with the same weight. `add_edge` and
/// `remove_edge` maintain this symmetry.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// node -> neighbor -> edge weight
    adjacency: HashMap<N, HashMap<N, W>>,
}

impl<N, W> UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with space reserved for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        UndirectedGraph {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Returns an iterator over all node identifiers
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Checks that every edge weight is non-negative.
    ///
    /// Dijkstra assumes non-negative weights; results are unspecified when
    /// that precondition is violated. Collaborators building graphs from
    /// external records can call this once after construction.
    pub fn validate_non_negative(&self) -> Result<()> {
        for neighbors in self.adjacency.values() {
            for weight in neighbors.values() {
                if *weight < W::zero() {
                    let raw = weight.to_f64().unwrap_or(f64::NAN);
                    return Err(Error::NegativeWeight(raw));
                }
            }
        }
        Ok(())
    }
}

impl<N, W> Graph<N, W> for UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        // Every edge appears in both endpoint maps; self-loops are not
        // representable, so halving is exact.
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> Result<Box<dyn Iterator<Item = (N, W)> + '_>> {
        match self.adjacency.get(node) {
            Some(neighbors) => Ok(Box::new(
                neighbors.iter().map(|(n, w)| (n.clone(), *w)),
            )),
            None => Err(Error::UnknownNode(format!("{:?}", node))),
        }
    }

    fn edge_weight(&self, u: &N, v: &N) -> Option<W> {
        self.adjacency.get(u).and_then(|n| n.get(v)).copied()
    }
}

impl<N, W> MutableGraph<N, W> for UndirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashMap::new());
        true
    }

    fn add_edge(&mut self, u: N, v: N, weight: W) -> bool {
        if weight < W::zero() || u == v {
            return false;
        }

        self.adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone(), weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
        true
    }

    fn remove_edge(&mut self, u: &N, v: &N) -> bool {
        let mut removed = false;
        if let Some(neighbors) = self.adjacency.get_mut(u) {
            removed = neighbors.remove(v).is_some();
        }
        if let Some(neighbors) = self.adjacency.get_mut(v) {
            neighbors.remove(u);
        }
        removed
    }
}
