//! Graph store with bidirectional adjacency lists.

use crate::arrow::{Arrow, ArrowVocabulary};
use crate::context::ContextRegistry;
use crate::error::GraphError;
use crate::handle::{ArrowHandle, NodeHandle, StoreId};
use crate::link::{Link, Orientation};
use crate::node::{Node, NodeRegistry};

/// An in-memory semantic graph.
///
/// Every edge is stored twice: once in the source node's forward list with the
/// requested arrow, and once in the destination node's backward list with the
/// inverse arrow. Both halves are written by the same call to
/// [`connect`](Graph::connect). Adjacency lists keep insertion order, which
/// fixes the order in which paths are enumerated.
///
/// The store is a multigraph: repeated edges between the same pair of nodes
/// are kept as distinct entries.
///
/// A graph cannot be cloned. Handles carry the id of the store that issued
/// them, and a copy sharing that id would accept handles minted by the other.
///
/// ```compile_fail
/// let graph = spacetime::Graph::new();
/// let copy: spacetime::Graph = graph.clone();
/// ```
#[derive(Debug)]
pub struct Graph {
    id: StoreId,
    arrows: ArrowVocabulary,
    contexts: ContextRegistry,
    nodes: NodeRegistry,
    forward: Vec<Vec<Link>>,
    backward: Vec<Vec<Link>>,
}

impl Graph {
    /// Creates an empty graph with the seeded `fwd`/`bwd` vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(ArrowVocabulary::seeded())
    }

    /// Creates an empty graph using the given arrow vocabulary.
    pub fn with_vocabulary(arrows: ArrowVocabulary) -> Self {
        let id = StoreId::new();
        Self {
            id,
            arrows,
            contexts: ContextRegistry::new(),
            nodes: NodeRegistry::new(id),
            forward: Vec::new(),
            backward: Vec::new(),
        }
    }

    /// Returns a builder for registering arrows before the graph is created.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Returns the identity of this store.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Returns the handle for `name`, creating the node if needed.
    ///
    /// The chapter of an existing node is left untouched.
    pub fn get_or_create_node(&mut self, name: &str, chapter: &str) -> NodeHandle {
        let handle = self.nodes.get_or_create(name, chapter);
        if self.forward.len() < self.nodes.len() {
            self.forward.push(Vec::new());
            self.backward.push(Vec::new());
        }
        handle
    }

    /// Adds a directed edge `from --arrow--> to`.
    ///
    /// Appends the forward half to `from` and the inverse half to `to`. The
    /// context tags are interned as one label; an empty list means no context.
    ///
    /// # Arguments
    ///
    /// * `from` - Source node
    /// * `arrow_name` - Long or short name of a registered arrow
    /// * `to` - Destination node
    /// * `context_tags` - Free-text tags shared by both halves
    /// * `weight` - Edge weight shared by both halves
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownArrow`] if the arrow is not registered. Nothing
    /// is written in that case.
    pub fn connect<S: AsRef<str>>(
        &mut self,
        from: NodeHandle,
        arrow_name: &str,
        to: NodeHandle,
        context_tags: &[S],
        weight: f32,
    ) -> Result<ArrowHandle, GraphError> {
        let arrow = match self.arrows.lookup(arrow_name) {
            Ok(arrow) => arrow,
            Err(e) => {
                #[cfg(feature = "logging")]
                log::warn!("refusing edge {from} -> {to}: {e}");
                return Err(e);
            }
        };
        let from_slot = self.nodes.slot(from);
        let to_slot = self.nodes.slot(to);
        let context = self.contexts.intern_tags(context_tags);
        let inverse = self.arrows.inverse_of(arrow);

        self.forward[from_slot].push(Link::new(arrow, to, weight, context));
        self.backward[to_slot].push(Link::new(inverse, from, weight, context));

        Ok(arrow)
    }

    /// Adds several edges, validating every arrow before writing any of them.
    ///
    /// # Arguments
    ///
    /// * `edges` - Edge tuples: (from, `arrow_name`, to, weight), all without context
    ///
    /// # Returns
    ///
    /// Returns the number of edges inserted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownArrow`] for the first unregistered arrow; the
    /// graph is left unchanged.
    pub fn connect_batch(
        &mut self,
        edges: &[(NodeHandle, &str, NodeHandle, f32)],
    ) -> Result<usize, GraphError> {
        let resolved = edges
            .iter()
            .map(|(from, arrow_name, to, weight)| {
                self.arrows
                    .lookup(arrow_name)
                    .map(|arrow| (*from, arrow, *to, *weight))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (from, arrow, to, weight) in &resolved {
            let from_slot = self.nodes.slot(*from);
            let to_slot = self.nodes.slot(*to);
            let inverse = self.arrows.inverse_of(*arrow);
            self.forward[from_slot].push(Link::new(*arrow, *to, *weight, Default::default()));
            self.backward[to_slot].push(Link::new(inverse, *from, *weight, Default::default()));
        }

        Ok(resolved.len())
    }

    /// Finds a node by exact name.
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.nodes.find_by_name(name)
    }

    /// Resolves a node handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this store.
    pub fn resolve_node(&self, handle: NodeHandle) -> &Node {
        self.nodes.resolve(handle)
    }

    /// Resolves an arrow handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this store's vocabulary.
    pub fn resolve_arrow(&self, handle: ArrowHandle) -> &Arrow {
        self.arrows.get(handle)
    }

    /// Returns the outgoing links of a node in insertion order.
    pub fn forward_of(&self, node: NodeHandle) -> &[Link] {
        &self.forward[self.nodes.slot(node)]
    }

    /// Returns the incoming links of a node in insertion order.
    ///
    /// Each link points back at the source of the original edge and carries the
    /// inverse arrow.
    pub fn backward_of(&self, node: NodeHandle) -> &[Link] {
        &self.backward[self.nodes.slot(node)]
    }

    /// Returns the adjacency list followed by the given orientation.
    pub fn adjacent(&self, node: NodeHandle, orientation: Orientation) -> &[Link] {
        match orientation {
            Orientation::Forward => self.forward_of(node),
            Orientation::Backward => self.backward_of(node),
        }
    }

    /// Returns the arrow vocabulary.
    pub fn arrows(&self) -> &ArrowVocabulary {
        &self.arrows
    }

    /// Returns the arrow vocabulary for registering more arrows.
    ///
    /// The vocabulary only adds arrows; the inverse of an arrow already
    /// carried by a link never changes.
    pub fn arrows_mut(&mut self) -> &mut ArrowVocabulary {
        &mut self.arrows
    }

    /// Returns the context registry.
    pub fn contexts(&self) -> &ContextRegistry {
        &self.contexts
    }

    /// Iterates nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.nodes.iter()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges (forward halves only).
    pub fn link_count(&self) -> usize {
        self.forward.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a graph with a custom arrow vocabulary.
///
/// # Example
///
/// ```
/// use spacetime::Graph;
///
/// let graph = Graph::builder()
///     .with_arrow_pair("leads to", "lt", "comes from", "cf")
///     .with_self_inverse("is near", "near")
///     .build()?;
/// assert!(graph.arrows().lookup("cf").is_ok());
/// # Ok::<(), spacetime::GraphError>(())
/// ```
pub struct GraphBuilder {
    seed: bool,
    pairs: Vec<(String, String, String, String)>,
    neutral: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Creates a builder that seeds the `fwd`/`bwd` pair.
    pub fn new() -> Self {
        Self {
            seed: true,
            pairs: Vec::new(),
            neutral: Vec::new(),
        }
    }

    /// Skips the seeded `fwd`/`bwd` pair.
    #[must_use]
    pub fn without_seed_arrows(mut self) -> Self {
        self.seed = false;
        self
    }

    /// Registers a forward/backward arrow pair.
    #[must_use]
    pub fn with_arrow_pair(
        mut self,
        forward_long: &str,
        forward_short: &str,
        backward_long: &str,
        backward_short: &str,
    ) -> Self {
        self.pairs.push((
            forward_long.to_string(),
            forward_short.to_string(),
            backward_long.to_string(),
            backward_short.to_string(),
        ));
        self
    }

    /// Registers a neutral arrow that is its own inverse.
    #[must_use]
    pub fn with_self_inverse(mut self, long_name: &str, short_name: &str) -> Self {
        self.neutral
            .push((long_name.to_string(), short_name.to_string()));
        self
    }

    /// Creates the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateArrow`] if two registrations share a name.
    pub fn build(self) -> Result<Graph, GraphError> {
        let mut arrows = if self.seed {
            ArrowVocabulary::seeded()
        } else {
            ArrowVocabulary::empty()
        };
        for (fl, fs, bl, bs) in &self.pairs {
            arrows.register_pair(fl, fs, bl, bs)?;
        }
        for (long_name, short_name) in &self.neutral {
            arrows.register_self_inverse(long_name, short_name)?;
        }
        Ok(Graph::with_vocabulary(arrows))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
