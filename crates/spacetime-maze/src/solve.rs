//! Solving mazes with contra-colliding wavefronts.

use crate::error::MazeError;
use crate::grid::{Maze, REFERENCE_END, REFERENCE_START};
use spacetime::{SolveTrace, SolverConfig};
use spacetime_render::TextRenderer;
use std::io::Write;

/// Solves `maze` from the square labelled `start` to the one labelled `end`.
///
/// # Errors
///
/// Returns [`MazeError::InvalidCell`] if either label is outside the maze or
/// names a wall.
///
/// # Example
///
/// ```
/// use spacetime::SolverConfig;
/// use spacetime_maze::{Maze, solve_maze};
///
/// let maze = Maze::parse("111\n001\n")?;
/// let trace = solve_maze(&maze, "a1", "b3", SolverConfig::default())?;
/// let shortest = trace.shortest_solution().unwrap();
/// assert_eq!(shortest.node_names(), vec!["a1", "a2", "a3", "b3"]);
/// # Ok::<(), spacetime_maze::MazeError>(())
/// ```
pub fn solve_maze(
    maze: &Maze,
    start: &str,
    end: &str,
    config: SolverConfig,
) -> Result<SolveTrace, MazeError> {
    check_open(maze, start)?;
    check_open(maze, end)?;

    let graph = maze.build_graph()?;

    #[cfg(feature = "logging")]
    log::info!(
        "solving {}x{} maze from {start} to {end}",
        maze.height(),
        maze.width()
    );

    Ok(graph.solve(start, end, config)?)
}

/// Solves the reference maze from `f9` to `b1`.
///
/// The two squares are twelve steps apart. With a frontier limit of 10 the
/// capped wavefronts never share a simple path, so only loop corrections are
/// found; an uncapped search of radius 6 on each side finds the solutions.
pub fn solve_reference(config: SolverConfig) -> Result<SolveTrace, MazeError> {
    solve_maze(&Maze::reference(), REFERENCE_START, REFERENCE_END, config)
}

/// Solves a maze and writes the round-by-round narrative to `out`.
pub fn solve_maze_with_output<W: Write>(
    maze: &Maze,
    start: &str,
    end: &str,
    config: SolverConfig,
    out: W,
) -> Result<SolveTrace, MazeError> {
    let trace = solve_maze(maze, start, end, config)?;
    TextRenderer::new(out).write_trace(&trace)?;
    Ok(trace)
}

fn check_open(maze: &Maze, label: &str) -> Result<(), MazeError> {
    match maze.position(label) {
        Some((row, col)) if maze.is_open(row, col) => Ok(()),
        _ => Err(MazeError::InvalidCell(label.to_string())),
    }
}
