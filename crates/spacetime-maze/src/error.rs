//! Error type for maze construction and solving.

use spacetime::GraphError;
use spacetime_render::RenderError;
use std::fmt;

/// Errors that can occur when building or solving a maze.
#[derive(Debug)]
pub enum MazeError {
    /// The grid text is malformed.
    InvalidGrid(String),
    /// An endpoint label does not name a walkable cell.
    InvalidCell(String),
    /// The underlying graph rejected an operation.
    Graph(GraphError),
    /// The result could not be rendered.
    Render(RenderError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidGrid(msg) => write!(f, "invalid maze grid: {msg}"),
            MazeError::InvalidCell(label) => {
                write!(f, "'{label}' is not a walkable cell of this maze")
            }
            MazeError::Graph(e) => write!(f, "graph error: {e}"),
            MazeError::Render(e) => write!(f, "render error: {e}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::Graph(e) => Some(e),
            MazeError::Render(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for MazeError {
    fn from(err: GraphError) -> Self {
        MazeError::Graph(err)
    }
}

impl From<RenderError> for MazeError {
    fn from(err: RenderError) -> Self {
        MazeError::Render(err)
    }
}
