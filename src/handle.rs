//! Opaque handles for stored entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of one graph store instance.
///
/// Every handle carries the id of the store that issued it, so handles minted
/// by two different stores never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreId(Uuid);

impl StoreId {
    /// Store id of handles that are valid everywhere, such as
    /// [`ContextHandle::NONE`].
    pub const UNSCOPED: StoreId = StoreId(Uuid::nil());

    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier for a node, valid for the lifetime of its store.
///
/// Indices start at 1 and are issued in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeHandle {
    store: StoreId,
    index: u32,
}

impl NodeHandle {
    pub(crate) fn new(store: StoreId, index: u32) -> Self {
        Self { store, index }
    }

    /// Returns the id of the store that issued this handle.
    pub fn store(&self) -> StoreId {
        self.store
    }

    /// Returns the 1-based creation index of the node.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index)
    }
}

/// Identifier for a registered arrow (relationship type).
///
/// Carries the id of the vocabulary that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArrowHandle {
    store: StoreId,
    index: u32,
}

impl ArrowHandle {
    pub(crate) fn new(store: StoreId, index: u32) -> Self {
        Self { store, index }
    }

    /// Returns the id of the vocabulary that issued this handle.
    pub fn store(&self) -> StoreId {
        self.store
    }

    /// Returns the raw registration index.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for ArrowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.index)
    }
}

/// Identifier for an interned context label.
///
/// [`ContextHandle::NONE`] (index 0) stands for "no context" and is valid in
/// every registry. Any other handle carries the id of the registry that
/// interned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContextHandle {
    store: StoreId,
    index: u32,
}

impl ContextHandle {
    /// The reserved handle for an empty context.
    pub const NONE: ContextHandle = ContextHandle {
        store: StoreId::UNSCOPED,
        index: 0,
    };

    pub(crate) fn new(store: StoreId, index: u32) -> Self {
        Self { store, index }
    }

    /// Returns true for the reserved empty context.
    pub fn is_none(&self) -> bool {
        self.index == 0
    }

    /// Returns the id of the registry that interned this handle.
    pub fn store(&self) -> StoreId {
        self.store
    }

    /// Returns the raw interning index.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl Default for ContextHandle {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.index)
    }
}
