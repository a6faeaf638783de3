//! Context registry: interned free-text tags attached to links.

use crate::handle::{ContextHandle, StoreId};
use std::collections::HashMap;

/// Interns context labels so links can carry a small handle instead of a string.
///
/// Slot 0 is reserved for the empty context and never allocated.
#[derive(Debug)]
pub struct ContextRegistry {
    id: StoreId,
    labels: Vec<String>,
    by_label: HashMap<String, ContextHandle>,
}

impl ContextRegistry {
    /// Creates a registry holding only the reserved empty context.
    pub fn new() -> Self {
        Self {
            id: StoreId::new(),
            labels: vec![String::new()],
            by_label: HashMap::new(),
        }
    }

    /// Interns a single tag, returning the same handle for repeated tags.
    ///
    /// The empty string maps to [`ContextHandle::NONE`].
    pub fn intern(&mut self, tag: &str) -> ContextHandle {
        if tag.is_empty() {
            return ContextHandle::NONE;
        }
        if let Some(handle) = self.by_label.get(tag) {
            return *handle;
        }

        let handle = ContextHandle::new(self.id, self.labels.len() as u32);
        self.labels.push(tag.to_string());
        self.by_label.insert(tag.to_string(), handle);
        handle
    }

    /// Interns a tag list as one label.
    ///
    /// Empty tags are dropped and the rest are joined with `", "` in the order
    /// given. A list with no non-empty tags maps to [`ContextHandle::NONE`].
    pub fn intern_tags<S: AsRef<str>>(&mut self, tags: &[S]) -> ContextHandle {
        let label = tags
            .iter()
            .map(AsRef::as_ref)
            .filter(|tag| !tag.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        self.intern(&label)
    }

    /// Looks up an already interned tag without allocating.
    pub fn find(&self, tag: &str) -> Option<ContextHandle> {
        if tag.is_empty() {
            return Some(ContextHandle::NONE);
        }
        self.by_label.get(tag).copied()
    }

    /// Returns the label of a context handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this registry.
    pub fn label(&self, context: ContextHandle) -> &str {
        if context.is_none() {
            return "";
        }
        assert_eq!(
            context.store(),
            self.id,
            "context handle {context} belongs to registry {}, not {}",
            context.store(),
            self.id
        );
        let slot = context.index() as usize;
        assert!(
            slot < self.labels.len(),
            "context handle {context} was not issued by this registry"
        );
        &self.labels[slot]
    }

    /// Returns the id stamped on every handle this registry interns.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Returns the number of interned non-empty labels.
    pub fn len(&self) -> usize {
        self.labels.len() - 1
    }

    /// Returns true if only the reserved empty context exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::new()
    }
}
