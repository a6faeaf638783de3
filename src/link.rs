//! Link and path types.

use crate::handle::{ArrowHandle, ContextHandle, NodeHandle};
use serde::{Deserialize, Serialize};

/// One half of a directed edge, stored in a node's adjacency list.
///
/// The source node is implicit: it is the node whose list holds the link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Relationship type of this half.
    pub arrow: ArrowHandle,
    /// Node reached by following the link.
    pub destination: NodeHandle,
    /// Edge weight, shared by both halves.
    pub weight: f32,
    /// Context label, shared by both halves.
    pub context: ContextHandle,
}

impl Link {
    /// Creates a new link.
    pub fn new(
        arrow: ArrowHandle,
        destination: NodeHandle,
        weight: f32,
        context: ContextHandle,
    ) -> Self {
        Self {
            arrow,
            destination,
            weight,
            context,
        }
    }
}

/// An ordered sequence of links from an implicit start node.
///
/// The i-th link's destination is the node reached after i+1 hops.
pub type Path = Vec<Link>;

/// Which adjacency list a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Follow outgoing links.
    Forward,
    /// Follow incoming links (stored with inverse arrows).
    Backward,
}

impl Orientation {
    /// Returns the opposite orientation.
    pub fn reverse(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Backward,
            Orientation::Backward => Orientation::Forward,
        }
    }
}

/// Returns the node each path ends on, in path order.
///
/// Duplicates are kept. An empty path has no tip and contributes nothing, so
/// entry `i` of the result is the tip of `paths[i]` only when no earlier path
/// is empty. Paths returned by [`Graph::enumerate_paths`](crate::Graph::enumerate_paths)
/// are never empty; pair indices with `paths` directly when mixing in others.
pub fn wavefront(paths: &[Path]) -> Vec<NodeHandle> {
    paths
        .iter()
        .filter_map(|path| path.last().map(|link| link.destination))
        .collect()
}
