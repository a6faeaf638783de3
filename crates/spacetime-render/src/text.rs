//! Line-oriented text rendering of solver traces.

use crate::error::RenderError;
use spacetime::{NamedPath, RoundRecord, SolveTrace};
use std::io::Write;

/// Renders a path as `start -(arrow)-> next -(arrow)-> ...`.
///
/// An empty path renders as an empty string.
pub fn render_path(path: &NamedPath) -> String {
    let Some(first) = path.steps.first() else {
        return String::new();
    };
    let mut rendered = first.from.clone();
    for step in &path.steps {
        rendered.push_str(&format!(" -({})-> {}", step.arrow, step.to));
    }
    rendered
}

/// Renders a frontier as a comma-terminated list of names.
pub fn render_frontier(names: &[String]) -> String {
    names.iter().map(|name| format!("{name},")).collect()
}

/// Writes the round-by-round narrative of a search.
///
/// # Example
///
/// ```
/// use spacetime::{Graph, SolverConfig};
/// use spacetime_render::TextRenderer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut graph = Graph::new();
/// let a = graph.get_or_create_node("a", "");
/// let m = graph.get_or_create_node("m", "");
/// let b = graph.get_or_create_node("b", "");
/// graph.connect::<&str>(a, "fwd", m, &[], 1.0)?;
/// graph.connect::<&str>(m, "fwd", b, &[], 1.0)?;
/// let trace = graph.solve("a", "b", SolverConfig::builder().max_depth(2).build())?;
///
/// let mut out = Vec::new();
/// TextRenderer::new(&mut out).write_trace(&trace)?;
/// assert!(String::from_utf8(out)?.contains(" - story 0: a -(fwd)-> m -(fwd)-> b"));
/// # Ok(())
/// # }
/// ```
pub struct TextRenderer<W: Write> {
    out: W,
    groups: usize,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, groups: 0 }
    }

    /// Writes every round of a trace.
    pub fn write_trace(&mut self, trace: &SolveTrace) -> Result<(), RenderError> {
        for round in &trace.rounds {
            self.write_round(&trace.start, &trace.end, round)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Writes one round: both frontiers, the collisions, then any solutions
    /// and loop corrections as numbered groups.
    pub fn write_round(
        &mut self,
        start: &str,
        end: &str,
        round: &RoundRecord,
    ) -> Result<(), RenderError> {
        writeln!(
            self.out,
            "\n  Left front radius {} : {}",
            round.left_depth,
            render_frontier(&round.left_frontier)
        )?;
        writeln!(
            self.out,
            "  Right front radius {} : {}",
            round.right_depth,
            render_frontier(&round.right_frontier)
        )?;

        if !round.collisions.is_empty() {
            let places: String = round
                .collisions
                .iter()
                .map(|c| format!("{}, ", c.node))
                .collect();
            writeln!(
                self.out,
                "  (i.e. waves impinge {} times at: {places})\n",
                round.collisions.len()
            )?;
            for collision in &round.collisions {
                writeln!(
                    self.out,
                    "...SPLICE PATHS L{} with R{}.....",
                    collision.left, collision.right
                )?;
            }
        }
        writeln!(
            self.out,
            "  (found {} touching solutions)",
            round.collisions.len()
        )?;

        if !round.solutions.is_empty() {
            writeln!(self.out, "-- T R E E ----------------------------------")?;
            self.write_group(start, end, round, &round.solutions)?;
            writeln!(self.out, "-------------------------------------------")?;
        }
        if !round.loop_corrections.is_empty() {
            writeln!(self.out, "++ L O O P S +++++++++++++++++++++++++++++++")?;
            self.write_group(start, end, round, &round.loop_corrections)?;
            writeln!(self.out, "+++++++++++++++++++++++++++++++++++++++++++")?;
        }
        Ok(())
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_group(
        &mut self,
        start: &str,
        end: &str,
        round: &RoundRecord,
        paths: &[NamedPath],
    ) -> Result<(), RenderError> {
        writeln!(
            self.out,
            "Path solution {} from {start} to {end} with lengths {} -{}",
            self.groups, round.left_depth, round.right_depth
        )?;
        for (i, path) in paths.iter().enumerate() {
            writeln!(self.out, " - story {i}: {}", render_path(path))?;
        }
        self.groups += 1;
        Ok(())
    }
}
