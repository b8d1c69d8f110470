use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::{Graph, MutableGraph, UndirectedGraph};

/// Generates a random connected road network with n nodes.
///
/// Nodes are labeled "N0".."N{n-1}". A random spanning tree guarantees
/// connectivity, then `extra_edges` additional edges are sprinkled in. Each
/// edge weight models distance * (1 + traffic) with distance in 1.0..50.0 and
/// a traffic factor in 0.0..1.0.
pub fn generate_road_network(
    n: usize,
    extra_edges: usize,
) -> UndirectedGraph<String, OrderedFloat<f64>> {
    assert!(n > 0, "n must be positive");

    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = rand::thread_rng();

    let labels: Vec<String> = (0..n).map(|i| format!("N{}", i)).collect();
    for label in &labels {
        graph.add_node(label.clone());
    }

    // Spanning tree: attach each node to a random earlier one
    for i in 1..n {
        let j = rng.gen_range(0..i);
        let weight = road_weight(&mut rng);
        graph.add_edge(labels[i].clone(), labels[j].clone(), weight);
    }

    // Extra edges on top of the tree, clamped to the number of node pairs
    // the spanning tree leaves unconnected so the retry loop can always
    // finish
    let spare_pairs = n * (n - 1) / 2 - (n - 1);
    let extra_edges = extra_edges.min(spare_pairs);
    let mut added = 0;
    while added < extra_edges {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i != j && graph.edge_weight(&labels[i], &labels[j]).is_none() {
            let weight = road_weight(&mut rng);
            graph.add_edge(labels[i].clone(), labels[j].clone(), weight);
            added += 1;
        }
    }

    graph
}

/// Generates a width x height grid network with unit edge weights.
///
/// Nodes are labeled "x,y" and connected to their 4-neighbors. Deterministic,
/// useful for tests that need known distances.
pub fn generate_grid_network(
    width: usize,
    height: usize,
) -> UndirectedGraph<String, OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::with_capacity(width * height);

    let label = |x: usize, y: usize| format!("{},{}", x, y);

    for y in 0..height {
        for x in 0..width {
            graph.add_node(label(x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(label(x, y), label(x + 1, y), OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(label(x, y), label(x, y + 1), OrderedFloat(1.0));
            }
        }
    }

    graph
}

fn road_weight(rng: &mut ThreadRng) -> OrderedFloat<f64> {
    let distance = rng.gen_range(1.0..50.0);
    let traffic = rng.gen_range(0.0..1.0);
    OrderedFloat(distance * (1.0 + traffic))
}
