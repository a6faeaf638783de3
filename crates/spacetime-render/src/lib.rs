//! # spacetime-render
//!
//! Presentation of spacetime solver traces.
//!
//! The core crate returns a structured [`SolveTrace`](spacetime::SolveTrace) and
//! performs no formatting. This crate turns a trace into:
//!
//! - **Text**: the round-by-round narrative with frontier lines, splice notes,
//!   and numbered "tree" and "loop" groups ([`TextRenderer`])
//! - **JSON**: a self-contained report with solutions, loops, per-round search
//!   steps and statistics ([`Report`])
//!
//! ## Quick Start
//!
//! ```rust
//! use spacetime::{Graph, SolverConfig};
//! use spacetime_render::Report;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new();
//! let a = graph.get_or_create_node("a", "");
//! let m = graph.get_or_create_node("m", "");
//! let b = graph.get_or_create_node("b", "");
//! graph.connect::<&str>(a, "fwd", m, &[], 1.0)?;
//! graph.connect::<&str>(m, "fwd", b, &[], 1.0)?;
//!
//! let trace = graph.solve("a", "b", SolverConfig::default())?;
//! let report = Report::from_trace(&trace);
//! assert_eq!(report.statistics.total_solutions, 1);
//! println!("{}", report.to_json()?);
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
pub mod report;
pub mod text;

pub use error::RenderError;
pub use report::{PathLink, Report, ReportPath, SearchStep, Statistics};
pub use text::{TextRenderer, render_frontier, render_path};
