//! Cone enumeration: bounded breadth-first expansion of exact-length paths.

use crate::graph::Graph;
use crate::handle::NodeHandle;
use crate::link::{Link, Orientation, Path};
use std::collections::HashSet;

struct Tendril {
    tip: NodeHandle,
    links: Path,
}

impl Graph {
    /// Enumerates every path of exactly `depth` hops from `start`.
    ///
    /// The frontier starts as the empty path at `start` and is extended `depth`
    /// times by every link of each tip, in adjacency order. `limit` caps the size
    /// of the frontier built in each round: once it is reached, later extensions
    /// of that round are dropped. A `limit` of 0 leaves the frontier uncapped.
    /// If the frontier empties before `depth` rounds, no paths are returned.
    ///
    /// # Returns
    ///
    /// The paths of length `depth` and their count.
    pub fn enumerate_paths(
        &self,
        start: NodeHandle,
        orientation: Orientation,
        depth: usize,
        limit: usize,
    ) -> (Vec<Path>, usize) {
        let frontier = self.expand(start, orientation, depth, limit, |_| {});
        let paths: Vec<Path> = frontier
            .into_iter()
            .filter(|tendril| tendril.links.len() == depth)
            .map(|tendril| tendril.links)
            .collect();
        let count = paths.len();
        (paths, count)
    }

    /// Returns the distinct nodes reached by paths of 1 to `depth` hops.
    ///
    /// Nodes are listed in first-visit order; `start` is only included if a path
    /// returns to it.
    pub fn cone_nodes(
        &self,
        start: NodeHandle,
        orientation: Orientation,
        depth: usize,
        limit: usize,
    ) -> Vec<NodeHandle> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        self.expand(start, orientation, depth, limit, |round| {
            for tendril in round {
                if seen.insert(tendril.tip) {
                    nodes.push(tendril.tip);
                }
            }
        });
        nodes
    }

    /// Returns, for each radius 1 to `depth`, the links that reach that radius.
    ///
    /// Entry `r - 1` holds the last link of every path of length `r`. Stops early
    /// when the frontier empties, so the result may be shorter than `depth`.
    pub fn cone_links(
        &self,
        start: NodeHandle,
        orientation: Orientation,
        depth: usize,
        limit: usize,
    ) -> Vec<Vec<Link>> {
        let mut shells: Vec<Vec<Link>> = Vec::new();
        self.expand(start, orientation, depth, limit, |round| {
            shells.push(
                round
                    .iter()
                    .filter_map(|tendril| tendril.links.last().copied())
                    .collect(),
            );
        });
        shells
    }

    fn expand(
        &self,
        start: NodeHandle,
        orientation: Orientation,
        depth: usize,
        limit: usize,
        mut on_round: impl FnMut(&[Tendril]),
    ) -> Vec<Tendril> {
        let capped = |len: usize| limit > 0 && len >= limit;
        let mut frontier = vec![Tendril {
            tip: start,
            links: Vec::new(),
        }];

        for _ in 0..depth {
            let mut next = Vec::new();
            'round: for tendril in &frontier {
                for link in self.adjacent(tendril.tip, orientation) {
                    let mut links = Vec::with_capacity(tendril.links.len() + 1);
                    links.extend_from_slice(&tendril.links);
                    links.push(*link);
                    next.push(Tendril {
                        tip: link.destination,
                        links,
                    });
                    if capped(next.len()) {
                        break 'round;
                    }
                }
            }

            frontier = next;
            if frontier.is_empty() {
                break;
            }
            on_round(&frontier);
        }

        frontier
    }
}

#[cfg(test)]
mod tests {
    use crate::arrow::FORWARD;
    use crate::graph::Graph;
    use crate::handle::NodeHandle;
    use crate::link::{Orientation, wavefront};

    const NO_CONTEXT: &[&str] = &[];

    fn chain() -> (Graph, Vec<NodeHandle>) {
        let mut graph = Graph::new();
        let nodes: Vec<NodeHandle> = ["A", "B", "C"]
            .iter()
            .map(|name| graph.get_or_create_node(name, ""))
            .collect();
        graph.connect(nodes[0], FORWARD, nodes[1], NO_CONTEXT, 1.0).unwrap();
        graph.connect(nodes[1], FORWARD, nodes[2], NO_CONTEXT, 1.0).unwrap();
        (graph, nodes)
    }

    #[test]
    fn test_exact_depth_on_chain() {
        let (graph, nodes) = chain();

        let (paths, count) = graph.enumerate_paths(nodes[0], Orientation::Forward, 1, 100);
        assert_eq!(count, 1);
        assert_eq!(paths[0].len(), 1);
        assert_eq!(paths[0][0].destination, nodes[1]);

        let (paths, count) = graph.enumerate_paths(nodes[0], Orientation::Forward, 2, 100);
        assert_eq!(count, 1);
        assert_eq!(paths[0].len(), 2);
        assert_eq!(wavefront(&paths), vec![nodes[2]]);

        let (paths, count) = graph.enumerate_paths(nodes[0], Orientation::Forward, 5, 100);
        assert_eq!(count, 0);
        assert!(paths.is_empty());
    }

    #[test]
    fn test_backward_orientation_walks_incoming_links() {
        let (graph, nodes) = chain();

        let (paths, count) = graph.enumerate_paths(nodes[2], Orientation::Backward, 2, 100);
        assert_eq!(count, 1);
        assert_eq!(paths[0][0].destination, nodes[1]);
        assert_eq!(paths[0][1].destination, nodes[0]);
    }

    #[test]
    fn test_depth_zero_is_the_empty_path() {
        let (graph, nodes) = chain();
        let (paths, count) = graph.enumerate_paths(nodes[0], Orientation::Forward, 0, 100);
        assert_eq!(count, 1);
        assert!(paths[0].is_empty());
        assert!(wavefront(&paths).is_empty());
    }

    #[test]
    fn test_limit_caps_each_round_in_adjacency_order() {
        let mut graph = Graph::new();
        let hub = graph.get_or_create_node("hub", "");
        let spokes: Vec<NodeHandle> = (0..5)
            .map(|i| graph.get_or_create_node(&format!("s{i}"), ""))
            .collect();
        for spoke in &spokes {
            graph.connect(hub, FORWARD, *spoke, NO_CONTEXT, 1.0).unwrap();
        }

        let (paths, count) = graph.enumerate_paths(hub, Orientation::Forward, 1, 3);
        assert_eq!(count, 3);
        assert_eq!(wavefront(&paths), spokes[..3].to_vec());

        let (_, uncapped) = graph.enumerate_paths(hub, Orientation::Forward, 1, 0);
        assert_eq!(uncapped, 5);
    }

    #[test]
    fn test_cycles_are_enumerated_with_repeats() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A", "");
        let b = graph.get_or_create_node("B", "");
        graph.connect(a, FORWARD, b, NO_CONTEXT, 1.0).unwrap();
        graph.connect(b, FORWARD, a, NO_CONTEXT, 1.0).unwrap();

        let (paths, count) = graph.enumerate_paths(a, Orientation::Forward, 4, 100);
        assert_eq!(count, 1);
        assert_eq!(wavefront(&paths), vec![a]);
    }

    #[test]
    fn test_cone_nodes_and_links() {
        let mut graph = Graph::new();
        let names = ["n1", "n2", "n3", "n4", "n5", "n6"];
        let n: Vec<NodeHandle> = names
            .iter()
            .map(|name| graph.get_or_create_node(name, "home and away"))
            .collect();
        for (from, to) in [(0, 1), (1, 2), (2, 3), (1, 4), (4, 5), (5, 1)] {
            graph.connect(n[from], FORWARD, n[to], NO_CONTEXT, 0.34).unwrap();
        }

        let nodes = graph.cone_nodes(n[0], Orientation::Forward, 8, 100);
        assert_eq!(nodes, vec![n[1], n[2], n[4], n[3], n[5]]);

        let shells = graph.cone_links(n[0], Orientation::Forward, 3, 100);
        assert_eq!(shells.len(), 3);
        assert_eq!(shells[0].len(), 1);
        assert_eq!(shells[1].len(), 2);
        assert_eq!(shells[2].len(), 2);

        let short = graph.cone_links(n[3], Orientation::Forward, 3, 100);
        assert!(short.is_empty());
    }
}
