//! JSON report of a solver trace.

use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use spacetime::{NamedPath, PathKind, SolveTrace};
use std::collections::HashSet;
use std::io::Write;

/// One hop of a reported path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathLink {
    /// Node the hop leaves.
    pub from: String,
    /// Node the hop reaches.
    pub to: String,
    /// Long arrow name.
    pub arrow: String,
    /// Link weight.
    pub weight: f32,
}

/// A reported start-to-end path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPath {
    /// Position in its list (solutions and loops are numbered separately).
    pub id: usize,
    /// `"tree"` for solutions, `"loop"` for loop corrections.
    #[serde(rename = "type")]
    pub kind: String,
    /// Left radius at discovery.
    pub left_depth: usize,
    /// Right radius at discovery.
    pub right_depth: usize,
    /// Hop count.
    pub total_length: usize,
    /// The hops in order.
    pub path: Vec<PathLink>,
}

/// Summary of one search round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    /// Zero-based turn.
    pub turn: usize,
    /// Left radius.
    pub left_depth: usize,
    /// Right radius.
    pub right_depth: usize,
    /// Distinct left tip names in first-seen order.
    pub left_frontier: Vec<String>,
    /// Distinct right tip names in first-seen order.
    pub right_frontier: Vec<String>,
    /// Solutions found this round.
    pub solutions_found: usize,
    /// Loop corrections found this round.
    pub loops_found: usize,
}

/// Totals over the whole search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of solutions.
    pub total_solutions: usize,
    /// Number of loop corrections.
    pub total_loops: usize,
    /// Largest left radius searched.
    pub max_left_depth: usize,
    /// Largest right radius searched.
    pub max_right_depth: usize,
    /// Number of rounds.
    pub total_search_steps: usize,
}

/// A complete JSON-ready description of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Start node name.
    pub start_node: String,
    /// End node name.
    pub end_node: String,
    /// Configured maximum radius.
    pub max_depth: usize,
    /// Acyclic paths in discovery order.
    pub solutions: Vec<ReportPath>,
    /// Loop corrections in discovery order.
    pub loops: Vec<ReportPath>,
    /// Per-round summaries.
    pub search_steps: Vec<SearchStep>,
    /// Totals.
    pub statistics: Statistics,
}

impl Report {
    /// Builds a report from a trace.
    pub fn from_trace(trace: &SolveTrace) -> Self {
        let solutions: Vec<ReportPath> = trace
            .solutions()
            .enumerate()
            .map(|(id, path)| report_path(id, path))
            .collect();
        let loops: Vec<ReportPath> = trace
            .loop_corrections()
            .enumerate()
            .map(|(id, path)| report_path(id, path))
            .collect();
        let search_steps: Vec<SearchStep> = trace
            .rounds
            .iter()
            .map(|round| SearchStep {
                turn: round.turn,
                left_depth: round.left_depth,
                right_depth: round.right_depth,
                left_frontier: distinct(&round.left_frontier),
                right_frontier: distinct(&round.right_frontier),
                solutions_found: round.solutions.len(),
                loops_found: round.loop_corrections.len(),
            })
            .collect();

        let statistics = Statistics {
            total_solutions: solutions.len(),
            total_loops: loops.len(),
            max_left_depth: trace.max_left_depth(),
            max_right_depth: trace.max_right_depth(),
            total_search_steps: search_steps.len(),
        };

        Self {
            start_node: trace.start.clone(),
            end_node: trace.end.clone(),
            max_depth: trace.config.max_depth,
            solutions,
            loops,
            search_steps,
            statistics,
        }
    }

    /// Serializes the report as indented JSON.
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the report as compact JSON.
    pub fn to_json_compact(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Writes the report as indented JSON followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

fn report_path(id: usize, path: &NamedPath) -> ReportPath {
    let kind = match path.kind {
        PathKind::Solution => "tree",
        PathKind::LoopCorrection => "loop",
    };
    ReportPath {
        id,
        kind: kind.to_string(),
        left_depth: path.left_depth,
        right_depth: path.right_depth,
        total_length: path.hops,
        path: path
            .steps
            .iter()
            .map(|step| PathLink {
                from: step.from.clone(),
                to: step.to.clone(),
                arrow: step.arrow.clone(),
                weight: step.weight,
            })
            .collect(),
    }
}

fn distinct(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}
