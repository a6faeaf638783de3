//! Maze grids and their translation into a spacetime graph.

use crate::error::MazeError;
use spacetime::Graph;
use spacetime::arrow::FORWARD;
use std::fmt;

/// Chapter recorded on every maze node.
pub const MAZE_CHAPTER: &str = "solve maze";

/// Weight of every maze link.
pub const STEP_WEIGHT: f32 = 1.0;

/// Start cell of the reference maze.
pub const REFERENCE_START: &str = "f9";

/// End cell of the reference maze.
pub const REFERENCE_END: &str = "b1";

const REFERENCE_ROWS: [&str; 9] = [
    "000000000", // a
    "111111110", // b
    "011000110", // c
    "011111110", // d
    "011110110", // e
    "011111011", // f
    "010011100", // g
    "011111100", // h
    "000000000", // i
];

/// A single maze square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Blocked.
    Wall,
    /// Walkable.
    Open,
}

impl Cell {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Wall),
            '1' => Some(Cell::Open),
            _ => None,
        }
    }

    /// Returns true if the cell can be walked on.
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// A rectangular maze.
///
/// Rows are lettered from `a` downwards and columns numbered from `1`
/// rightwards, so the top-left square is `a1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Maze {
    /// Parses a maze from rows of `0` (wall) and `1` (open).
    ///
    /// Blank lines are skipped and spaces inside a row are ignored. Every
    /// row must have the same width and there can be at most 26 rows.
    ///
    /// # Example
    ///
    /// ```
    /// use spacetime_maze::Maze;
    ///
    /// let maze = Maze::parse("110\n011\n").unwrap();
    /// assert_eq!((maze.height(), maze.width()), (2, 3));
    /// assert!(maze.is_open(1, 2));
    /// assert_eq!(Maze::label(1, 2), "b3");
    /// ```
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Cell::from_char(c).ok_or_else(|| {
                        MazeError::InvalidGrid(format!(
                            "unexpected '{c}' on line {}",
                            line_no + 1
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Builds a maze from explicit rows of cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let Some(first) = rows.first() else {
            return Err(MazeError::InvalidGrid("maze has no rows".to_string()));
        };
        let width = first.len();
        if width == 0 {
            return Err(MazeError::InvalidGrid("maze has no columns".to_string()));
        }
        if rows.len() > 26 {
            return Err(MazeError::InvalidGrid(format!(
                "{} rows exceed the 26 row letters",
                rows.len()
            )));
        }
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(MazeError::InvalidGrid(format!(
                "row {} has {} cells, expected {width}",
                Self::row_letter(row),
                rows[row].len()
            )));
        }
        Ok(Self { rows, width })
    }

    /// The 9x9 reference maze, solved from `f9` to `b1`.
    pub fn reference() -> Self {
        let rows = REFERENCE_ROWS
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| if c == '1' { Cell::Open } else { Cell::Wall })
                    .collect()
            })
            .collect();
        Self { rows, width: 9 }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns true if `(row, col)` is inside the maze and open.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_open)
    }

    /// Node name of a square, e.g. `(0, 0)` is `a1`.
    pub fn label(row: usize, col: usize) -> String {
        format!("{}{}", Self::row_letter(row), col + 1)
    }

    /// Inverse of [`Maze::label`], checked against this maze's bounds.
    ///
    /// Only canonical labels are accepted, so `a01` and `a+1` are not `a1`.
    pub fn position(&self, label: &str) -> Option<(usize, usize)> {
        let mut chars = label.chars();
        let letter = u8::try_from(chars.next()?).ok()?;
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let row = usize::from(letter - b'a');
        let col = chars.as_str().parse::<usize>().ok()?.checked_sub(1)?;
        (row < self.height() && col < self.width && Self::label(row, col) == label)
            .then_some((row, col))
    }

    /// Number of open squares.
    pub fn open_cells(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_open())
            .count()
    }

    /// Builds the maze graph.
    ///
    /// Every open square becomes a node in the [`MAZE_CHAPTER`] chapter, in
    /// row-major order. Each pair of horizontally or vertically adjacent open
    /// squares is joined by a `fwd` link in both directions.
    pub fn build_graph(&self) -> Result<Graph, MazeError> {
        let mut graph = Graph::new();
        let no_tags: &[&str] = &[];

        for row in 0..self.height() {
            for col in 0..self.width {
                if !self.is_open(row, col) {
                    continue;
                }
                let here = graph.get_or_create_node(&Self::label(row, col), MAZE_CHAPTER);

                for (r, c) in [(row, col + 1), (row + 1, col)] {
                    if !self.is_open(r, c) {
                        continue;
                    }
                    let there = graph.get_or_create_node(&Self::label(r, c), MAZE_CHAPTER);
                    graph.connect(here, FORWARD, there, no_tags, STEP_WEIGHT)?;
                    graph.connect(there, FORWARD, here, no_tags, STEP_WEIGHT)?;
                }
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "built maze graph with {} nodes and {} links",
            graph.node_count(),
            graph.link_count()
        );

        Ok(graph)
    }

    fn row_letter(row: usize) -> char {
        char::from(b'a' + u8::try_from(row % 26).unwrap_or(0))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                f.write_str(if cell.is_open() { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
