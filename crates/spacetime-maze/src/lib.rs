//! # spacetime-maze
//!
//! Maze solving on a spacetime graph.
//!
//! A [`Maze`] is a grid of walls and open squares. Each open square becomes a
//! node named by its row letter and column number (`a1` is the top-left
//! square) and neighbouring open squares are joined by `fwd` links in both
//! directions. Solving sends one wavefront forward from the start square and
//! one backward from the end square until they meet.
//!
//! ## Quick Start
//!
//! ```rust
//! use spacetime::SolverConfig;
//! use spacetime_maze::solve_reference;
//!
//! # fn main() -> Result<(), spacetime_maze::MazeError> {
//! let config = SolverConfig::builder().max_depth(7).uncapped().build();
//! let trace = solve_reference(config)?;
//!
//! let shortest = trace.shortest_solution().unwrap();
//! assert_eq!(shortest.hops, 12);
//! assert_eq!(shortest.node_names().first(), Some(&"f9"));
//! assert_eq!(shortest.node_names().last(), Some(&"b1"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod grid;
pub mod solve;

pub use error::MazeError;
pub use grid::{Cell, MAZE_CHAPTER, Maze, REFERENCE_END, REFERENCE_START, STEP_WEIGHT};
pub use solve::{solve_maze, solve_maze_with_output, solve_reference};
