//! Solver benchmark for spacetime
//!
//! Tests spacetime performance characteristics:
//! - Edge insertion (individual and validated batch)
//! - Cone enumeration by radius, capped and uncapped
//! - Path adjoints
//! - Full graph iteration (LinkSource trait)
//! - Complete wavefront solves on random graphs and the reference maze

use spacetime::{Graph, LinkSource, NodeHandle, Orientation, SolverConfig};
use spacetime_maze::solve_reference;
use std::time::{Duration, Instant};

const WARMUP_ITERATIONS: usize = 1;
const BENCHMARK_ITERATIONS: usize = 3;

fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

fn format_throughput(ops: usize, duration: Duration) -> String {
    let ops_per_sec = ops as f64 / duration.as_secs_f64();
    if ops_per_sec > 1_000_000.0 {
        format!("{:.2}M ops/sec", ops_per_sec / 1_000_000.0)
    } else if ops_per_sec > 1000.0 {
        format!("{:.2}K ops/sec", ops_per_sec / 1000.0)
    } else {
        format!("{ops_per_sec:.2} ops/sec")
    }
}

fn print_section(title: &str) {
    println!("\n{}", "=".repeat(80));
    println!("{title}");
    println!("{}", "=".repeat(80));
    println!("  {:<50} {:>12}  {:>15}", "Test", "Duration", "Throughput");
    println!("  {}", "-".repeat(80));
}

fn print_result(name: &str, duration: Duration, ops: usize) {
    println!(
        "  {:<50} {:>12}  {:>15}",
        name,
        format_duration(duration),
        format_throughput(ops, duration)
    );
}

/// Runs `f` for the warmup and measured iterations, returning the mean
/// measured duration and the last reported op count.
fn measure(mut f: impl FnMut() -> (Duration, usize)) -> (Duration, usize) {
    let mut durations = Vec::new();
    let mut ops = 0;
    for i in 0..WARMUP_ITERATIONS + BENCHMARK_ITERATIONS {
        let (duration, count) = f();
        if i >= WARMUP_ITERATIONS {
            durations.push(duration);
            ops = count;
        }
    }
    let avg = durations.iter().sum::<Duration>() / durations.len() as u32;
    (avg, ops)
}

/// Generate reproducible random edges as (source, target, weight) indices
fn generate_edges(count: usize, num_vertices: usize) -> Vec<(usize, usize, f32)> {
    let mut edges = Vec::with_capacity(count);
    let mut rng = 12345u64;

    for _ in 0..count {
        rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
        let source = (rng as usize) % num_vertices;

        rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
        let target = (rng as usize) % num_vertices;

        rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
        let weight = (rng % 100) as f32 / 100.0;

        edges.push((source, target, weight));
    }

    edges
}

fn create_nodes(graph: &mut Graph, num_vertices: usize) -> Vec<NodeHandle> {
    (0..num_vertices)
        .map(|i| graph.get_or_create_node(&format!("v{i}"), "bench"))
        .collect()
}

fn build_random_graph(num_edges: usize, num_vertices: usize) -> (Graph, Vec<NodeHandle>) {
    let mut graph = Graph::new();
    let nodes = create_nodes(&mut graph, num_vertices);
    for (source, target, weight) in generate_edges(num_edges, num_vertices) {
        graph
            .connect(nodes[source], "fwd", nodes[target], &["bench"], weight)
            .unwrap();
    }
    (graph, nodes)
}

/// Benchmark: Individual edge insertions
fn benchmark_individual_inserts(num_edges: usize) -> (Duration, usize) {
    let mut graph = Graph::new();
    let nodes = create_nodes(&mut graph, (num_edges / 10).max(1));
    let edges = generate_edges(num_edges, nodes.len());

    let start = Instant::now();
    for (source, target, weight) in &edges {
        graph
            .connect(nodes[*source], "fwd", nodes[*target], &["bench"], *weight)
            .unwrap();
    }
    (start.elapsed(), graph.link_count())
}

/// Benchmark: Validated batch insertion
fn benchmark_batch_insert(num_edges: usize) -> (Duration, usize) {
    let mut graph = Graph::new();
    let nodes = create_nodes(&mut graph, (num_edges / 10).max(1));
    let batch: Vec<(NodeHandle, &str, NodeHandle, f32)> = generate_edges(num_edges, nodes.len())
        .into_iter()
        .map(|(source, target, weight)| (nodes[source], "fwd", nodes[target], weight))
        .collect();

    let start = Instant::now();
    let inserted = graph.connect_batch(&batch).unwrap();
    (start.elapsed(), inserted)
}

/// Benchmark: Cone enumeration at a fixed radius
fn benchmark_cone(graph: &Graph, nodes: &[NodeHandle], depth: usize, limit: usize) -> (Duration, usize) {
    let start = Instant::now();
    let mut total = 0;
    for &node in nodes.iter().take(100) {
        let (paths, count) = graph.enumerate_paths(node, Orientation::Forward, depth, limit);
        debug_assert_eq!(paths.len(), count);
        total += count;
    }
    (start.elapsed(), total)
}

/// Benchmark: Adjoints of every path in a cone
fn benchmark_adjoint(graph: &Graph, nodes: &[NodeHandle], depth: usize) -> (Duration, usize) {
    let (paths, _) = graph.enumerate_paths(nodes[0], Orientation::Backward, depth, 0);

    let start = Instant::now();
    let mut links = 0;
    for path in &paths {
        links += graph.adjoint(path).len();
    }
    (start.elapsed(), links)
}

/// Benchmark: Full graph iteration through LinkSource
fn benchmark_full_iteration(graph: &Graph) -> (Duration, usize) {
    let start = Instant::now();
    let count = graph.iter_links().count();
    (start.elapsed(), count)
}

/// Benchmark: Complete solves between pseudo-random node pairs
fn benchmark_solve(graph: &Graph, config: SolverConfig, pairs: usize) -> (Duration, usize) {
    let names: Vec<String> = graph.nodes().map(|(_, node)| node.name().to_string()).collect();

    let start = Instant::now();
    let mut found = 0;
    for i in 0..pairs {
        let from = &names[(i * 7) % names.len()];
        let to = &names[(i * 13 + 5) % names.len()];
        let trace = graph.solve(from, to, config).unwrap();
        found += trace.total_solutions() + trace.total_loop_corrections();
    }
    (start.elapsed(), found)
}

fn main() {
    env_logger::init();

    println!("\n{}", "=".repeat(80));
    println!("SPACETIME SOLVER BENCHMARK");
    println!("Testing graph construction, cone enumeration and wavefront solving");
    println!("{}", "=".repeat(80));
    println!();

    // 1. Individual Edge Insertions
    print_section("1. Individual Edge Insertions");
    for &count in &[1000, 10000, 100000] {
        let (avg, ops) = measure(|| benchmark_individual_inserts(count));
        print_result(&format!("{count} edges"), avg, ops);
    }

    // 2. Batch Edge Insertions
    print_section("2. Batch Edge Insertions");
    for &count in &[10000, 100000] {
        let (avg, ops) = measure(|| benchmark_batch_insert(count));
        print_result(&format!("{count} edges"), avg, ops);
    }

    let (graph, nodes) = build_random_graph(5000, 1000);

    // 3. Cone Enumeration
    print_section("3. Cone Enumeration (100 origins, 1000 nodes, degree 5)");
    for &(depth, limit) in &[(2, 0), (4, 0), (4, 10), (8, 10), (8, 100)] {
        let (avg, ops) = measure(|| benchmark_cone(&graph, &nodes, depth, limit));
        let limit_label = if limit == 0 {
            "uncapped".to_string()
        } else {
            format!("limit {limit}")
        };
        print_result(&format!("radius {depth}, {limit_label} ({ops} paths)"), avg, ops);
    }

    // 4. Adjoints
    print_section("4. Path Adjoints");
    for &depth in &[3, 5] {
        let (avg, ops) = measure(|| benchmark_adjoint(&graph, &nodes, depth));
        print_result(&format!("radius {depth} ({ops} links)"), avg, ops);
    }

    // 5. Full Graph Iteration
    print_section("5. Full Graph Iteration");
    for &count in &[10000, 100000] {
        let (big, _) = build_random_graph(count, count / 10);
        let (avg, ops) = measure(|| benchmark_full_iteration(&big));
        print_result(&format!("{count} edges (actual: {ops})"), avg, ops);
    }

    // 6. Wavefront Solves
    print_section("6. Wavefront Solves (20 node pairs)");
    for &(max_depth, limit) in &[(6, 10), (10, 10), (16, 10), (6, 100)] {
        let config = SolverConfig::new(max_depth, limit);
        let (avg, ops) = measure(|| benchmark_solve(&graph, config, 20));
        print_result(
            &format!("max depth {max_depth}, limit {limit} ({ops} paths)"),
            avg,
            20,
        );
    }

    // 7. Reference Maze
    print_section("7. Reference Maze");
    for (label, config) in [
        ("default config", SolverConfig::default()),
        (
            "uncapped, max depth 7",
            SolverConfig::builder().max_depth(7).uncapped().build(),
        ),
    ] {
        let (avg, ops) = measure(|| {
            let start = Instant::now();
            let trace = solve_reference(config).unwrap();
            (start.elapsed(), trace.rounds.len())
        });
        print_result(&format!("{label} ({ops} rounds)"), avg, ops);
    }

    println!("\n{}", "=".repeat(80));
    println!("BENCHMARK COMPLETE");
    println!("{}", "=".repeat(80));
    println!();
}
