use std::collections::HashSet;

use citypath::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use citypath::graph::generators::{generate_grid_network, generate_road_network};
use citypath::graph::{Graph, MutableGraph};
use citypath::{plan_route, plan_routes, Error, UndirectedGraph};
use ordered_float::OrderedFloat;

type Network = UndirectedGraph<String, OrderedFloat<f64>>;

fn edge(graph: &mut Network, u: &str, v: &str, w: f64) {
    graph.add_edge(u.to_string(), v.to_string(), OrderedFloat(w));
}

// Three-city network from the original route planner: the two-hop route
// through PHL beats the direct NYC-DC edge.
fn tri_city_network() -> Network {
    let mut graph = Network::new();
    edge(&mut graph, "NYC", "PHL", 2.0);
    edge(&mut graph, "PHL", "DC", 1.5);
    edge(&mut graph, "NYC", "DC", 5.0);
    graph
}

#[test]
fn test_tri_city_route_prefers_cheaper_detour() {
    let graph = tri_city_network();

    let route = plan_route(&graph, &"NYC".to_string(), &"DC".to_string())
        .unwrap()
        .expect("route should exist");

    assert_eq!(route.path, vec!["NYC", "PHL", "DC"]);
    assert_eq!(route.cost, OrderedFloat(3.5));
}

#[test]
fn test_route_to_self_is_single_node_with_zero_cost() {
    let graph = tri_city_network();

    for node in ["NYC", "PHL", "DC"] {
        let route = plan_route(&graph, &node.to_string(), &node.to_string())
            .unwrap()
            .expect("self route should exist");
        assert_eq!(route.path, vec![node]);
        assert_eq!(route.cost, OrderedFloat(0.0));
    }
}

#[test]
fn test_undirected_symmetry_of_costs() {
    let graph = tri_city_network();

    let forward = plan_route(&graph, &"NYC".to_string(), &"DC".to_string())
        .unwrap()
        .unwrap();
    let backward = plan_route(&graph, &"DC".to_string(), &"NYC".to_string())
        .unwrap()
        .unwrap();

    assert_eq!(forward.cost, backward.cost);

    let mut reversed = backward.path.clone();
    reversed.reverse();
    assert_eq!(forward.path, reversed);
}

#[test]
fn test_disconnected_components_yield_no_route() {
    let mut graph = Network::new();
    edge(&mut graph, "A", "B", 1.0);
    edge(&mut graph, "C", "D", 1.0);

    let route = plan_route(&graph, &"A".to_string(), &"C".to_string()).unwrap();
    assert!(route.is_none());
}

#[test]
fn test_unknown_nodes_fail_fast() {
    let graph = tri_city_network();

    let bad_start = plan_route(&graph, &"ZZZ".to_string(), &"NYC".to_string());
    assert!(matches!(bad_start, Err(Error::UnknownNode(_))));

    let bad_end = plan_route(&graph, &"NYC".to_string(), &"ZZZ".to_string());
    assert!(matches!(bad_end, Err(Error::UnknownNode(_))));
}

#[test]
fn test_grid_network_distance() {
    let graph = generate_grid_network(5, 5);

    let route = plan_route(&graph, &"0,0".to_string(), &"4,4".to_string())
        .unwrap()
        .expect("grid is connected");

    // Manhattan distance on a unit grid
    assert_eq!(route.cost, OrderedFloat(8.0));
    assert_eq!(route.path.len(), 9);
}

// Route paths must only use existing edges and their cost must equal the sum
// of the traversed edge weights
#[test]
fn test_route_path_is_continuous_and_cost_consistent() {
    let graph = generate_road_network(60, 40);

    let route = plan_route(&graph, &"N0".to_string(), &"N59".to_string())
        .unwrap()
        .expect("generated network is connected");

    let mut total = OrderedFloat(0.0);
    for pair in route.path.windows(2) {
        let weight = graph
            .edge_weight(&pair[0], &pair[1])
            .expect("path must only use existing edges");
        total = total + weight;
    }
    assert!((total.into_inner() - route.cost.into_inner()).abs() < 1e-9);
}

// Exhaustive check against all simple paths on a small fixed network
#[test]
fn test_dijkstra_matches_brute_force_on_small_network() {
    let mut graph = Network::new();
    edge(&mut graph, "A", "B", 4.0);
    edge(&mut graph, "A", "C", 2.0);
    edge(&mut graph, "B", "C", 1.0);
    edge(&mut graph, "B", "D", 5.0);
    edge(&mut graph, "C", "D", 8.0);
    edge(&mut graph, "C", "E", 10.0);
    edge(&mut graph, "D", "E", 2.0);
    edge(&mut graph, "D", "F", 6.0);
    edge(&mut graph, "E", "F", 3.0);

    let source = "A".to_string();
    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &source)
        .unwrap();

    for target in ["A", "B", "C", "D", "E", "F"] {
        let target = target.to_string();
        let expected = brute_force_cost(&graph, &source, &target);
        assert_eq!(
            result.distance_to(&target),
            expected,
            "distance mismatch for target {}",
            target
        );
    }
}

// Minimum cost over every simple path, found by exhaustive DFS
fn brute_force_cost(graph: &Network, start: &String, end: &String) -> Option<OrderedFloat<f64>> {
    fn dfs(
        graph: &Network,
        current: &String,
        end: &String,
        cost: OrderedFloat<f64>,
        seen: &mut HashSet<String>,
        best: &mut Option<OrderedFloat<f64>>,
    ) {
        if current == end {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (next, weight) in graph.neighbors(current).unwrap() {
            if seen.insert(next.clone()) {
                dfs(graph, &next, end, cost + weight, seen, best);
                seen.remove(&next);
            }
        }
    }

    let mut best = None;
    let mut seen = HashSet::from([start.clone()]);
    dfs(graph, start, end, OrderedFloat(0.0), &mut seen, &mut best);
    best
}

#[test]
fn test_batch_routing_matches_sequential() {
    let graph = generate_road_network(40, 30);

    let pairs: Vec<(String, String)> = (0..10)
        .map(|i| (format!("N{}", i), format!("N{}", 39 - i)))
        .collect();

    let batch = plan_routes(&graph, &pairs).unwrap();
    assert_eq!(batch.len(), pairs.len());

    for ((start, end), batched) in pairs.iter().zip(batch) {
        let sequential = plan_route(&graph, start, end).unwrap();
        let batched_cost = batched.map(|r| r.cost);
        let sequential_cost = sequential.map(|r| r.cost);
        assert_eq!(batched_cost, sequential_cost);
    }
}

#[test]
fn test_add_edge_maintains_symmetry() {
    let mut graph = Network::new();
    edge(&mut graph, "A", "B", 2.5);

    assert_eq!(
        graph.edge_weight(&"A".to_string(), &"B".to_string()),
        Some(OrderedFloat(2.5))
    );
    assert_eq!(
        graph.edge_weight(&"B".to_string(), &"A".to_string()),
        Some(OrderedFloat(2.5))
    );

    // Updating the weight keeps both directions in sync
    edge(&mut graph, "B", "A", 7.0);
    assert_eq!(
        graph.edge_weight(&"A".to_string(), &"B".to_string()),
        Some(OrderedFloat(7.0))
    );
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_negative_weight_rejected() {
    let mut graph = Network::new();
    let added = graph.add_edge("A".to_string(), "B".to_string(), OrderedFloat(-1.0));

    assert!(!added);
    assert_eq!(graph.node_count(), 0);
    assert!(graph.validate_non_negative().is_ok());
}

// Requesting more extra edges than unconnected node pairs exist must
// saturate the network and return, not retry forever
#[test]
fn test_generator_terminates_when_extra_edges_exceed_capacity() {
    let graph = generate_road_network(3, 10);
    assert_eq!(graph.node_count(), 3);
    // Complete graph on three nodes: spanning tree plus the one spare pair
    assert_eq!(graph.edge_count(), 3);

    let single = generate_road_network(1, 5);
    assert_eq!(single.node_count(), 1);
    assert_eq!(single.edge_count(), 0);
}

#[test]
fn test_negative_weight_error_carries_raw_value() {
    let err = Error::NegativeWeight(-1.5);
    assert_eq!(err.to_string(), "Negative edge weight: -1.5");
}

#[test]
fn test_neighbors_of_unknown_node_is_an_error() {
    let graph = tri_city_network();
    let result = graph.neighbors(&"ZZZ".to_string());
    assert!(matches!(result, Err(Error::UnknownNode(_))));
}
