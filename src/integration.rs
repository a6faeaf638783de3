//! Integration traits for external graph algorithm libraries.

use crate::graph::Graph;
use crate::handle::NodeHandle;
use crate::link::Link;

/// Trait for link sources consumable by graph algorithm libraries.
///
/// This trait enables external graph algorithm libraries (BFS, Dijkstra,
/// PageRank, etc.) to iterate over every edge of the graph exactly once.
pub trait LinkSource {
    /// Iterator type over `(source, forward link)` pairs.
    type Iter<'a>: Iterator<Item = (NodeHandle, &'a Link)>
    where
        Self: 'a;

    /// Returns an iterator over all edges, source node by source node.
    fn iter_links(&self) -> Self::Iter<'_>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns true if there are no edges.
    fn has_no_edges(&self) -> bool {
        self.edge_count() == 0
    }
}

/// Iterator over the forward half of every edge in a [`Graph`].
pub struct AllLinksIter<'a> {
    graph: &'a Graph,
    nodes: Vec<NodeHandle>,
    node: usize,
    link: usize,
}

impl<'a> Iterator for AllLinksIter<'a> {
    type Item = (NodeHandle, &'a Link);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(source) = self.nodes.get(self.node).copied() {
            let links = self.graph.forward_of(source);
            if let Some(link) = links.get(self.link) {
                self.link += 1;
                return Some((source, link));
            }
            self.node += 1;
            self.link = 0;
        }
        None
    }
}

impl LinkSource for Graph {
    type Iter<'a> = AllLinksIter<'a>;

    fn iter_links(&self) -> Self::Iter<'_> {
        AllLinksIter {
            graph: self,
            nodes: self.nodes().map(|(handle, _)| handle).collect(),
            node: 0,
            link: 0,
        }
    }

    fn edge_count(&self) -> usize {
        self.link_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrow::FORWARD;

    #[test]
    fn test_iter_links_visits_each_edge_once() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A", "");
        let b = graph.get_or_create_node("B", "");
        let c = graph.get_or_create_node("C", "");
        graph.connect::<&str>(a, FORWARD, b, &[], 1.0).unwrap();
        graph.connect::<&str>(a, FORWARD, c, &[], 2.0).unwrap();
        graph.connect::<&str>(c, FORWARD, b, &[], 3.0).unwrap();

        let edges: Vec<(NodeHandle, NodeHandle, f32)> = graph
            .iter_links()
            .map(|(source, link)| (source, link.destination, link.weight))
            .collect();

        assert_eq!(edges, vec![(a, b, 1.0), (a, c, 2.0), (c, b, 3.0)]);
        assert_eq!(graph.edge_count(), 3);
        assert!(!graph.has_no_edges());
        assert!(Graph::new().has_no_edges());
    }
}
