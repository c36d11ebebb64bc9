use rand::prelude::*;
use sap_graph::graph::generators::generate_hierarchy;
use sap_graph::graph::{Digraph, Graph};
use sap_graph::Sap;
use std::time::{Duration, Instant};

// Answer a set query the slow way: one pair query per member of V x W
fn nested_pairwise(sap: &Sap, v: &[usize], w: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for &a in v {
        for &b in w {
            if let Ok(Some(length)) = sap.length(a, b) {
                best = Some(best.map_or(length, |current| current.min(length)));
            }
        }
    }
    best
}

fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn sample(graph: &Digraph, k: usize, rng: &mut StdRng) -> Vec<usize> {
    (0..k).map(|_| rng.gen_range(0..graph.vertex_count())).collect()
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    let set_size = 8;
    let batch_size = 256;
    let max_parents = 3;

    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: set query (multi-source) vs nested pair queries");
    println!("Set size: {}, batch size: {}", set_size, batch_size);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating hierarchy with {} vertices...", size);
        let graph = generate_hierarchy(size, max_parents, &mut rng);
        let sap = Sap::new(&graph);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let v = sample(&graph, set_size, &mut rng);
        let w = sample(&graph, set_size, &mut rng);

        let (multi, multi_time) = time(|| sap.length_sets(v.iter().copied(), w.iter().copied()));
        let (nested, nested_time) = time(|| nested_pairwise(&sap, &v, &w));
        match multi {
            Ok(length) if length == nested => {}
            other => println!("  - MISMATCH: multi-source {:?} vs nested {:?}", other, nested),
        }

        let pairs: Vec<(usize, usize)> = (0..batch_size)
            .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
            .collect();
        let (_, sequential_time) = time(|| {
            pairs
                .iter()
                .map(|&(a, b)| sap.query(a, b))
                .collect::<Vec<_>>()
        });
        let (_, parallel_time) = time(|| sap.query_many(&pairs));

        println!("  - Set query: {:?}, nested: {:?}", multi_time, nested_time);
        println!("  - Batch sequential: {:?}, parallel: {:?}", sequential_time, parallel_time);

        results.push((size, multi_time, nested_time, sequential_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<10} | {:<12} | {:<12} | {:<10}",
        "Vertices", "Set (ms)", "Nested (ms)", "SpeedUp", "Seq (ms)", "Par (ms)", "SpeedUp"
    );
    println!("-----------------------------------------------------");

    for (size, multi, nested, sequential, parallel) in &results {
        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<10.2} | {:<12.2} | {:<12.2} | {:<10.2}",
            size,
            multi.as_secs_f64() * 1000.0,
            nested.as_secs_f64() * 1000.0,
            nested.as_secs_f64() / multi.as_secs_f64(),
            sequential.as_secs_f64() * 1000.0,
            parallel.as_secs_f64() * 1000.0,
            sequential.as_secs_f64() / parallel.as_secs_f64()
        );
    }
}
