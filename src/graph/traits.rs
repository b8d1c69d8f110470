use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing a weighted undirected graph over opaque node identifiers
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph, each counted once
    fn edge_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn contains(&self, node: &N) -> bool;

    /// Returns an iterator over the neighbors of a node and the edge weight
    /// to each.
    ///
    /// Fails with [`Error::UnknownNode`](crate::Error::UnknownNode) if the
    /// node is absent from the graph.
    fn neighbors(&self, node: &N) -> Result<Box<dyn Iterator<Item = (N, W)> + '_>>;

    /// Gets the weight of the edge between the two nodes if it exists
    fn edge_weight(&self, u: &N, v: &N) -> Option<W>;
}

/// Trait for mutable graph operations.
///
/// Populating a graph from external records is a collaborator's job; the
/// engine itself only reads. Once handed to a query, a graph must stay
/// unchanged until the query returns.
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node with no edges; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds an undirected edge, creating missing endpoints.
    ///
    /// Both directions are inserted so the adjacency stays symmetric. An
    /// existing edge has its weight updated on both sides. Returns false and
    /// leaves the graph untouched when the weight is negative.
    fn add_edge(&mut self, u: N, v: N, weight: W) -> bool;

    /// Removes an undirected edge from both endpoints; returns false if no
    /// such edge existed
    fn remove_edge(&mut self, u: &N, v: &N) -> bool;
}
