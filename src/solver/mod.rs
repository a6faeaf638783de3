//! Bidirectional wavefront path solving.
//!
//! Two cones are grown alternately: a forward cone from the start node (the
//! left wavefront) and a backward cone from the end node (the right wavefront).
//! Whenever a left path and a right path end on the same node, the two are
//! spliced into one start-to-end path and classified as a solution (no node
//! visited twice) or a loop correction.
//!
//! # Turn structure
//!
//! Both radii start at 1. Each turn enumerates exact-length paths on both
//! sides, records collisions, splices and classifies every colliding pair, and
//! then grows one side: the left radius on even turns, the right radius on odd
//! turns. The search never stops at the first solution; it runs until either
//! radius reaches [`SolverConfig::max_depth`].
//!
//! # Example
//!
//! ```
//! use spacetime::{Graph, SolverConfig};
//!
//! # fn main() -> Result<(), spacetime::GraphError> {
//! let mut graph = Graph::new();
//! let start = graph.get_or_create_node("start", "demo");
//! let middle = graph.get_or_create_node("middle", "demo");
//! let end = graph.get_or_create_node("end", "demo");
//! graph.connect::<&str>(start, "fwd", middle, &[], 1.0)?;
//! graph.connect::<&str>(middle, "fwd", end, &[], 1.0)?;
//!
//! let trace = graph.solve("start", "end", SolverConfig::builder().max_depth(3).build())?;
//! let shortest = trace.shortest_solution().unwrap();
//! assert_eq!(shortest.node_names(), vec!["start", "middle", "end"]);
//! # Ok(())
//! # }
//! ```

mod config;
mod splice;
mod trace;

pub use config::{SolverConfig, SolverConfigBuilder};
pub use splice::{collisions, is_acyclic, splice};
pub use trace::{Collision, NamedPath, NamedStep, PathKind, RoundRecord, SolveTrace};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::handle::NodeHandle;
use crate::link::{Link, Orientation, wavefront};

/// Runs bidirectional searches over one graph.
pub struct Solver<'g> {
    graph: &'g Graph,
    config: SolverConfig,
}

impl<'g> Solver<'g> {
    /// Creates a solver over `graph`.
    pub fn new(graph: &'g Graph, config: SolverConfig) -> Self {
        Self { graph, config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches for paths between two named nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EndpointNotFound`] if either name does not resolve,
    /// before any expansion happens.
    pub fn solve(&self, start_name: &str, end_name: &str) -> Result<SolveTrace, GraphError> {
        let start = self.endpoint(start_name)?;
        let end = self.endpoint(end_name)?;

        #[cfg(feature = "logging")]
        log::info!(
            "solving {start_name} -> {end_name} (max depth {}, limit {})",
            self.config.max_depth,
            self.config.limit
        );

        let mut rounds = Vec::new();
        let mut running_total = 0;
        let (mut left_depth, mut right_depth) = (1, 1);
        let mut turn = 0;

        while left_depth < self.config.max_depth && right_depth < self.config.max_depth {
            let mut record = self.round(start, end, turn, left_depth, right_depth);
            running_total += record.running_total;
            record.running_total = running_total;

            #[cfg(feature = "logging")]
            log::debug!(
                "turn {turn} radii {left_depth}/{right_depth}: {} collisions, {} solutions, {} loops",
                record.collisions.len(),
                record.solutions.len(),
                record.loop_corrections.len()
            );

            rounds.push(record);
            if turn % 2 == 0 {
                left_depth += 1;
            } else {
                right_depth += 1;
            }
            turn += 1;
        }

        #[cfg(feature = "logging")]
        log::info!("search finished after {turn} turns with {running_total} spliced paths");

        Ok(SolveTrace {
            start: start_name.to_string(),
            end: end_name.to_string(),
            config: self.config,
            rounds,
        })
    }

    /// Runs a single turn at the given radii.
    ///
    /// The returned record's `running_total` counts this round only.
    pub fn round(
        &self,
        start: NodeHandle,
        end: NodeHandle,
        turn: usize,
        left_depth: usize,
        right_depth: usize,
    ) -> RoundRecord {
        let limit = self.config.limit;
        let (left, _) = self
            .graph
            .enumerate_paths(start, Orientation::Forward, left_depth, limit);
        let (right, _) = self
            .graph
            .enumerate_paths(end, Orientation::Backward, right_depth, limit);

        let mut record = RoundRecord {
            turn,
            left_depth,
            right_depth,
            left_frontier: self.names(&wavefront(&left)),
            right_frontier: self.names(&wavefront(&right)),
            collisions: Vec::new(),
            solutions: Vec::new(),
            loop_corrections: Vec::new(),
            running_total: 0,
        };

        for (l, r) in collisions(&left, &right) {
            let meeting = left[l]
                .last()
                .map(|link| self.graph.resolve_node(link.destination).name().to_string())
                .unwrap_or_default();
            record.collisions.push(Collision {
                left: l,
                right: r,
                node: meeting,
            });

            let joined = splice(self.graph, &left[l], &right[r], end);
            if is_acyclic(&joined) {
                record.solutions.push(self.named(
                    start,
                    &joined,
                    PathKind::Solution,
                    left_depth,
                    right_depth,
                ));
            } else {
                record.loop_corrections.push(self.named(
                    start,
                    &joined,
                    PathKind::LoopCorrection,
                    left_depth,
                    right_depth,
                ));
            }
        }

        record.running_total = record.solutions.len() + record.loop_corrections.len();
        record
    }

    /// Resolves a path's handles to names, starting from `start`.
    pub fn named(
        &self,
        start: NodeHandle,
        path: &[Link],
        kind: PathKind,
        left_depth: usize,
        right_depth: usize,
    ) -> NamedPath {
        let mut from = start;
        let steps = path
            .iter()
            .map(|link| {
                let step = NamedStep {
                    from: self.graph.resolve_node(from).name().to_string(),
                    arrow: self.graph.resolve_arrow(link.arrow).long_name().to_string(),
                    to: self.graph.resolve_node(link.destination).name().to_string(),
                    weight: link.weight,
                    context: self.graph.contexts().label(link.context).to_string(),
                };
                from = link.destination;
                step
            })
            .collect();

        NamedPath {
            kind,
            left_depth,
            right_depth,
            hops: path.len(),
            steps,
        }
    }

    fn endpoint(&self, name: &str) -> Result<NodeHandle, GraphError> {
        self.graph
            .find_node_by_name(name)
            .ok_or_else(|| GraphError::EndpointNotFound(name.to_string()))
    }

    fn names(&self, nodes: &[NodeHandle]) -> Vec<String> {
        nodes
            .iter()
            .map(|node| self.graph.resolve_node(*node).name().to_string())
            .collect()
    }
}

impl Graph {
    /// Searches for paths between two named nodes with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EndpointNotFound`] if either name does not resolve.
    pub fn solve(
        &self,
        start_name: &str,
        end_name: &str,
        config: SolverConfig,
    ) -> Result<SolveTrace, GraphError> {
        Solver::new(self, config).solve(start_name, end_name)
    }

    /// Searches for paths between two named nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EndpointNotFound`] if either name does not resolve.
    pub fn solve_bidirectional(
        &self,
        start_name: &str,
        end_name: &str,
        max_depth: usize,
        limit: usize,
    ) -> Result<SolveTrace, GraphError> {
        self.solve(start_name, end_name, SolverConfig::new(max_depth, limit))
    }
}
