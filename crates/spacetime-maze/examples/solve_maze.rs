//! Solves the reference maze and prints the round-by-round narrative.
//!
//! Run with `RUST_LOG=debug cargo run -p spacetime-maze --features logging --example solve_maze`
//! to see the solver's log output as well.

use spacetime::SolverConfig;
use spacetime_maze::{Maze, REFERENCE_END, REFERENCE_START, solve_maze_with_output};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let maze = Maze::reference();
    println!("Maze ({} open squares):\n{maze}", maze.open_cells());

    let stdout = std::io::stdout();
    let trace = solve_maze_with_output(
        &maze,
        REFERENCE_START,
        REFERENCE_END,
        SolverConfig::builder().max_depth(7).uncapped().build(),
        stdout.lock(),
    )?;

    println!(
        "\n{} solutions, {} loop corrections",
        trace.total_solutions(),
        trace.total_loop_corrections()
    );
    if let Some(best) = trace.shortest_solution() {
        println!(
            "Shortest: {} ({} steps)",
            spacetime_render::render_path(best),
            best.hops
        );
    }
    Ok(())
}
