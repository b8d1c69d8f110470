use std::time::{Duration, Instant};

use citypath::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use citypath::graph::generators::generate_road_network;
use citypath::graph::Graph;
use citypath::plan_route;

fn main() {
    env_logger::init();

    // Network sizes to test
    let network_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Roughly half as many extra edges as nodes, on top of the spanning tree
    let extra_edge_factor = 0.5;

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random road networks");
    println!("Extra edges: {} per node (on top of spanning tree)", extra_edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &network_sizes {
        println!("\nGenerating road network with {} nodes...", size);
        let extra = (size as f64 * extra_edge_factor) as usize;
        let network = generate_road_network(size, extra);
        println!(
            "Network has {} nodes and {} edges",
            network.node_count(),
            network.edge_count()
        );

        let start_node = "N0".to_string();
        let end_node = format!("N{}", size - 1);

        // Full single-source run
        let start = Instant::now();
        let result = dijkstra
            .compute_shortest_paths(&network, &start_node)
            .unwrap();
        let sssp_time = start.elapsed();
        let reachable = result.distances.len();
        println!("  - Settled {} reachable nodes in {:?}", reachable, sssp_time);

        // Point-to-point route
        let start = Instant::now();
        let route = plan_route(&network, &start_node, &end_node).unwrap();
        let route_time = start.elapsed();
        match route {
            Some(route) => println!(
                "  - Route {} -> {}: {} hops, cost {:.2} in {:?}",
                start_node,
                end_node,
                route.path.len(),
                route.cost.into_inner(),
                route_time
            ),
            None => println!("  - No route from {} to {}", start_node, end_node),
        }

        results.push((size, sssp_time, route_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Nodes", "SSSP (ms)", "Route (ms)");
    println!("-----------------------------------------------------");
    for (size, sssp_time, route_time) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2}",
            size,
            as_millis(sssp_time),
            as_millis(route_time)
        );
    }
}

fn as_millis(d: &Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
