//! Node registry: name-to-handle and handle-to-node mapping.

use crate::handle::{NodeHandle, StoreId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A concept in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    name: String,
    chapter: String,
}

impl Node {
    /// Returns the unique name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chapter the node was first created under.
    pub fn chapter(&self) -> &str {
        &self.chapter
    }
}

/// Arena of nodes indexed by handle, with exact-match name lookup.
///
/// Not `Clone`: a copy would keep the store id and issue handles that
/// resolve in both registries.
#[derive(Debug)]
pub struct NodeRegistry {
    store: StoreId,
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeHandle>,
}

impl NodeRegistry {
    pub(crate) fn new(store: StoreId) -> Self {
        Self {
            store,
            nodes: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Returns the handle for `name`, creating the node if it does not exist.
    ///
    /// The chapter is only recorded on first creation; later calls with the same
    /// name ignore it.
    pub fn get_or_create(&mut self, name: &str, chapter: &str) -> NodeHandle {
        if let Some(handle) = self.by_name.get(name) {
            return *handle;
        }

        let handle = NodeHandle::new(self.store, self.nodes.len() as u32 + 1);
        self.nodes.push(Node {
            name: name.to_string(),
            chapter: chapter.to_string(),
        });
        self.by_name.insert(name.to_string(), handle);
        handle
    }

    /// Finds a node by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.by_name.get(name).copied()
    }

    /// Resolves a handle to its node.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by another store or is out of range.
    pub fn resolve(&self, handle: NodeHandle) -> &Node {
        &self.nodes[self.slot(handle)]
    }

    /// Iterates nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        let store = self.store;
        self.nodes
            .iter()
            .enumerate()
            .map(move |(i, node)| (NodeHandle::new(store, i as u32 + 1), node))
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no nodes exist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maps a handle to its arena slot, failing loudly on foreign handles.
    pub(crate) fn slot(&self, handle: NodeHandle) -> usize {
        assert_eq!(
            handle.store(),
            self.store,
            "node handle {handle} belongs to store {}, not {}",
            handle.store(),
            self.store
        );
        let slot = handle.index() as usize;
        assert!(
            slot >= 1 && slot <= self.nodes.len(),
            "node handle {handle} was not issued by this store"
        );
        slot - 1
    }
}
