//! # spacetime
//!
//! An in-memory semantic "space-time" graph with bidirectional wavefront path
//! solving.
//!
//! Nodes are named concepts; links are directed, typed and weighted. Every
//! relationship type (an *arrow*) has a registered inverse, so each edge is
//! stored in both directions and can be traversed either way.
//!
//! ## Features
//!
//! - **Handle-based arena**: nodes, arrows and contexts are addressed by small
//!   opaque handles; node handles are stamped with their store's identity
//! - **Bidirectional adjacency**: forward and backward halves written together
//! - **Exact-radius cones**: bounded breadth-first enumeration of all paths of a
//!   given hop count, in insertion order
//! - **Path adjoints**: reversal with semantic arrow inversion
//! - **Wavefront solver**: alternating left/right expansion, collision
//!   splicing, and classification into solutions and loop corrections
//!
//! ## Quick Start
//!
//! ```rust
//! use spacetime::{Graph, Orientation, SolverConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new();
//! let start = graph.get_or_create_node("Start", "diamond");
//! let a = graph.get_or_create_node("A", "diamond");
//! let b = graph.get_or_create_node("B", "diamond");
//! let end = graph.get_or_create_node("End", "diamond");
//!
//! for (from, to) in [(start, a), (start, b), (a, end), (b, end)] {
//!     graph.connect(from, "fwd", to, &["example"], 1.0)?;
//! }
//!
//! // Every path of exactly one hop from Start
//! let (paths, count) = graph.enumerate_paths(start, Orientation::Forward, 1, 100);
//! assert_eq!(count, 2);
//! assert_eq!(paths[0][0].destination, a);
//!
//! // Meet in the middle
//! let trace = graph.solve("Start", "End", SolverConfig::default())?;
//! assert_eq!(trace.total_solutions(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The store is single-owner and synchronous. All construction is expected to
//! happen before searching; wrap the [`Graph`] in a `Mutex` if it must be shared
//! across threads. The core performs no formatting or I/O: a solve returns a
//! [`SolveTrace`] for a presentation layer to render.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation
)]

pub mod adjoint;
pub mod arrow;
pub mod cone;
pub mod context;
pub mod error;
pub mod graph;
pub mod handle;
pub mod integration;
pub mod link;
pub mod node;
pub mod solver;

pub use arrow::{Arrow, ArrowVocabulary};
pub use context::ContextRegistry;
pub use error::GraphError;
pub use graph::{Graph, GraphBuilder};
pub use handle::{ArrowHandle, ContextHandle, NodeHandle, StoreId};
pub use integration::{AllLinksIter, LinkSource};
pub use link::{Link, Orientation, Path, wavefront};
pub use node::{Node, NodeRegistry};
pub use solver::{
    Collision, NamedPath, NamedStep, PathKind, RoundRecord, SolveTrace, Solver, SolverConfig,
    SolverConfigBuilder,
};
