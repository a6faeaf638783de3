//! Collision detection and path splicing between two wavefronts.

use crate::graph::Graph;
use crate::handle::NodeHandle;
use crate::link::{Link, Path};
use std::collections::HashSet;

/// Finds every `(left, right)` pair of paths that end on the same node.
///
/// Pairs are listed left-major, then by right index. Empty paths never collide.
pub fn collisions(left: &[Path], right: &[Path]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (l, left_path) in left.iter().enumerate() {
        let Some(left_tip) = left_path.last().map(|link| link.destination) else {
            continue;
        };
        for (r, right_path) in right.iter().enumerate() {
            if right_path.last().map(|link| link.destination) == Some(left_tip) {
                pairs.push((l, r));
            }
        }
    }
    pairs
}

/// Joins a forward path from the start with a backward path from `end`.
///
/// Both paths must end on the same meeting node. The result is `left`, then the
/// adjoint of `right` without its first link (which would repeat the meeting
/// node), then one closing link into `end` carrying the inverse of the right
/// path's first arrow together with that link's weight and context.
pub fn splice(graph: &Graph, left: &[Link], right: &[Link], end: NodeHandle) -> Path {
    let mut joined = Vec::with_capacity(left.len() + right.len());
    joined.extend_from_slice(left);

    let Some(first) = right.first() else {
        return joined;
    };
    let adjoint = graph.adjoint(right);
    joined.extend_from_slice(&adjoint[1..]);
    joined.push(Link {
        arrow: graph.arrows().inverse_of(first.arrow),
        destination: end,
        ..*first
    });
    joined
}

/// Returns true if no node is reached twice along the path.
pub fn is_acyclic(path: &[Link]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|link| seen.insert(link.destination))
}
