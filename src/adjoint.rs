//! Path adjoint: reversal with semantic arrow inversion.

use crate::graph::Graph;
use crate::link::{Link, Path};

impl Graph {
    /// Returns `path` reversed, with arrows replaced by inverses.
    ///
    /// Destination, weight and context stay with their link; only the order and
    /// the arrows change. The arrow written at each position is the inverse of
    /// the arrow of the step that follows it in the original order, and the
    /// first entry reuses the inverse of the last original arrow.
    pub fn adjoint(&self, path: &[Link]) -> Path {
        let Some(last) = path.last() else {
            return Vec::new();
        };

        let mut adjoint = Vec::with_capacity(path.len());
        let mut following = last.arrow;
        for link in path.iter().rev() {
            adjoint.push(Link {
                arrow: self.arrows().inverse_of(following),
                ..*link
            });
            following = link.arrow;
        }
        adjoint
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use crate::handle::NodeHandle;
    use crate::link::{Link, Orientation};

    const NO_CONTEXT: &[&str] = &[];

    fn story() -> (Graph, Vec<NodeHandle>, Vec<Link>) {
        let mut graph = Graph::builder()
            .with_arrow_pair("leads to", "lt", "comes from", "cf")
            .with_arrow_pair("contains", "contain", "is part of", "part")
            .with_arrow_pair("expresses", "expr", "is expressed by", "exprby")
            .build()
            .unwrap();
        let nodes: Vec<NodeHandle> = ["N0", "N1", "N2", "N3"]
            .iter()
            .map(|name| graph.get_or_create_node(name, "story"))
            .collect();
        graph.connect(nodes[0], "lt", nodes[1], &["first"], 0.1).unwrap();
        graph.connect(nodes[1], "contain", nodes[2], &["second"], 0.2).unwrap();
        graph.connect(nodes[2], "expr", nodes[3], &["third"], 0.3).unwrap();

        let (paths, _) = graph.enumerate_paths(nodes[0], Orientation::Forward, 3, 10);
        let path = paths.into_iter().next().unwrap();
        (graph, nodes, path)
    }

    #[test]
    fn test_empty_path() {
        let graph = Graph::new();
        assert!(graph.adjoint(&[]).is_empty());
    }

    #[test]
    fn test_reverses_order_and_keeps_payload() {
        let (graph, nodes, path) = story();
        let adjoint = graph.adjoint(&path);

        let destinations: Vec<NodeHandle> = adjoint.iter().map(|l| l.destination).collect();
        assert_eq!(destinations, vec![nodes[3], nodes[2], nodes[1]]);
        let weights: Vec<f32> = adjoint.iter().map(|l| l.weight).collect();
        assert_eq!(weights, vec![0.3, 0.2, 0.1]);
        assert_eq!(adjoint[0].context, path[2].context);
    }

    #[test]
    fn test_inverts_the_following_arrow() {
        let (graph, _, path) = story();
        let adjoint = graph.adjoint(&path);
        let arrows = graph.arrows();

        assert_eq!(adjoint[0].arrow, arrows.inverse_of(path[2].arrow));
        assert_eq!(adjoint[1].arrow, arrows.inverse_of(path[2].arrow));
        assert_eq!(adjoint[2].arrow, arrows.inverse_of(path[1].arrow));
        assert_eq!(graph.resolve_arrow(adjoint[2].arrow).short_name(), "part");
    }

    #[test]
    fn test_round_trip_restores_destinations() {
        let (graph, _, path) = story();
        let twice = graph.adjoint(&graph.adjoint(&path));

        let original: Vec<NodeHandle> = path.iter().map(|l| l.destination).collect();
        let restored: Vec<NodeHandle> = twice.iter().map(|l| l.destination).collect();
        assert_eq!(restored, original);
        // Every arrow past the first is restored under the pairing rule.
        assert_eq!(twice[1].arrow, path[1].arrow);
        assert_eq!(twice[2].arrow, path[2].arrow);
    }

    #[test]
    fn test_backward_path_adjoint_reads_forward() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A", "");
        let b = graph.get_or_create_node("B", "");
        let c = graph.get_or_create_node("C", "");
        graph.connect(a, "fwd", b, NO_CONTEXT, 1.0).unwrap();
        graph.connect(b, "fwd", c, NO_CONTEXT, 1.0).unwrap();

        let (paths, _) = graph.enumerate_paths(c, Orientation::Backward, 2, 10);
        let adjoint = graph.adjoint(&paths[0]);

        for link in &adjoint {
            assert_eq!(graph.resolve_arrow(link.arrow).short_name(), "fwd");
        }
    }
}
