//! Structured record of a solver run, consumed by presentation layers.

use super::config::SolverConfig;
use serde::{Deserialize, Serialize};

/// Classification of a spliced start-to-end path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Visits every node at most once.
    Solution,
    /// Revisits at least one node.
    LoopCorrection,
}

/// One hop of a named path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedStep {
    /// Node the hop leaves.
    pub from: String,
    /// Long name of the arrow followed.
    pub arrow: String,
    /// Node the hop reaches.
    pub to: String,
    /// Link weight.
    pub weight: f32,
    /// Context label, empty for none.
    pub context: String,
}

/// A spliced path with node and arrow names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPath {
    /// Solution or loop correction.
    pub kind: PathKind,
    /// Radius of the left wavefront when the path was found.
    pub left_depth: usize,
    /// Radius of the right wavefront when the path was found.
    pub right_depth: usize,
    /// Hop count.
    pub hops: usize,
    /// Hops from the start node to the end node.
    pub steps: Vec<NamedStep>,
}

impl NamedPath {
    /// Returns the visited node names, start node first.
    pub fn node_names(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            names.push(first.from.as_str());
        }
        names.extend(self.steps.iter().map(|step| step.to.as_str()));
        names
    }
}

/// A meeting of the two wavefronts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    /// Index of the left path.
    pub left: usize,
    /// Index of the right path.
    pub right: usize,
    /// Name of the node both paths end on.
    pub node: String,
}

/// Everything observed in one turn of the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Zero-based turn number.
    pub turn: usize,
    /// Radius of the forward wavefront from the start node.
    pub left_depth: usize,
    /// Radius of the backward wavefront from the end node.
    pub right_depth: usize,
    /// Tip node names of the left paths, in path order.
    pub left_frontier: Vec<String>,
    /// Tip node names of the right paths, in path order.
    pub right_frontier: Vec<String>,
    /// Every pair of left and right paths that ended on the same node.
    pub collisions: Vec<Collision>,
    /// Acyclic spliced paths found this round.
    pub solutions: Vec<NamedPath>,
    /// Spliced paths that revisit a node.
    pub loop_corrections: Vec<NamedPath>,
    /// Solutions plus loop corrections found up to and including this round.
    pub running_total: usize,
}

/// The ordered rounds of one bidirectional search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveTrace {
    /// Name of the start node.
    pub start: String,
    /// Name of the end node.
    pub end: String,
    /// Configuration the search ran with.
    pub config: SolverConfig,
    /// One record per turn.
    pub rounds: Vec<RoundRecord>,
}

impl SolveTrace {
    /// Iterates all solutions in discovery order.
    pub fn solutions(&self) -> impl Iterator<Item = &NamedPath> {
        self.rounds.iter().flat_map(|round| round.solutions.iter())
    }

    /// Iterates all loop corrections in discovery order.
    pub fn loop_corrections(&self) -> impl Iterator<Item = &NamedPath> {
        self.rounds
            .iter()
            .flat_map(|round| round.loop_corrections.iter())
    }

    /// Returns the number of solutions found.
    pub fn total_solutions(&self) -> usize {
        self.solutions().count()
    }

    /// Returns the number of loop corrections found.
    pub fn total_loop_corrections(&self) -> usize {
        self.loop_corrections().count()
    }

    /// Returns the largest left radius searched, or 0 if no round ran.
    pub fn max_left_depth(&self) -> usize {
        self.rounds.iter().map(|r| r.left_depth).max().unwrap_or(0)
    }

    /// Returns the largest right radius searched, or 0 if no round ran.
    pub fn max_right_depth(&self) -> usize {
        self.rounds.iter().map(|r| r.right_depth).max().unwrap_or(0)
    }

    /// Returns the shortest solution, earliest first on ties.
    pub fn shortest_solution(&self) -> Option<&NamedPath> {
        self.solutions()
            .fold(None, |best: Option<&NamedPath>, path| match best {
                Some(best) if best.hops <= path.hops => Some(best),
                _ => Some(path),
            })
    }
}
