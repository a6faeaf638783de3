//! Arrow vocabulary: directed relationship types and their inverses.

use crate::error::GraphError;
use crate::handle::{ArrowHandle, StoreId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Long and short name of the seeded forward arrow.
pub const FORWARD: &str = "fwd";
/// Long and short name of the seeded backward arrow.
pub const BACKWARD: &str = "bwd";

/// A directed relationship type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
    long_name: String,
    short_name: String,
    direction: i8,
}

impl Arrow {
    /// Returns the descriptive name (e.g. "leads to").
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Returns the abbreviated name (e.g. "lt").
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Returns the direction index: -1 backward, 0 neutral, +1 forward.
    pub fn direction(&self) -> i8 {
        self.direction
    }
}

/// Registry of arrows, looked up by long or short name.
///
/// Arrows are registered either in inverse pairs or as their own inverse.
/// Registration never changes the inverse of an existing arrow, so links that
/// already carry an arrow keep a valid inverse.
///
/// A vocabulary is not `Clone`: two copies would issue interchangeable
/// handles for arrows that later diverge.
///
/// ```compile_fail
/// let vocabulary = spacetime::ArrowVocabulary::seeded();
/// let copy: spacetime::ArrowVocabulary = vocabulary.clone();
/// ```
#[derive(Debug)]
pub struct ArrowVocabulary {
    id: StoreId,
    arrows: Vec<Arrow>,
    inverse: Vec<ArrowHandle>,
    by_name: HashMap<String, ArrowHandle>,
}

impl ArrowVocabulary {
    /// Creates an empty vocabulary.
    pub fn empty() -> Self {
        Self {
            id: StoreId::new(),
            arrows: Vec::new(),
            inverse: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Creates a vocabulary seeded with the `fwd`/`bwd` inverse pair.
    pub fn seeded() -> Self {
        let mut vocabulary = Self::empty();
        let forward = vocabulary.insert(FORWARD, FORWARD, 1);
        let backward = vocabulary.insert(BACKWARD, BACKWARD, -1);
        vocabulary.pair(forward, backward);
        vocabulary
    }

    /// Registers a single arrow that is its own inverse.
    pub fn register(
        &mut self,
        long_name: &str,
        short_name: &str,
        direction: i8,
    ) -> Result<ArrowHandle, GraphError> {
        self.check_unused(&[long_name, short_name])?;
        Ok(self.insert(long_name, short_name, direction))
    }

    fn insert(&mut self, long_name: &str, short_name: &str, direction: i8) -> ArrowHandle {
        let handle = ArrowHandle::new(self.id, self.arrows.len() as u32);
        self.arrows.push(Arrow {
            long_name: long_name.to_string(),
            short_name: short_name.to_string(),
            direction: direction.signum(),
        });
        self.inverse.push(handle);
        self.by_name.insert(long_name.to_string(), handle);
        self.by_name.insert(short_name.to_string(), handle);

        #[cfg(feature = "logging")]
        log::debug!("registered arrow '{long_name}' ({short_name}) as {handle}");

        handle
    }

    fn check_unused(&self, names: &[&str]) -> Result<(), GraphError> {
        match names.iter().find(|name| self.by_name.contains_key(**name)) {
            Some(name) => Err(GraphError::DuplicateArrow((*name).to_string())),
            None => Ok(()),
        }
    }

    /// Records two freshly inserted arrows as mutual inverses.
    fn pair(&mut self, a: ArrowHandle, b: ArrowHandle) {
        let (slot_a, slot_b) = (self.slot(a), self.slot(b));
        debug_assert!(
            self.inverse[slot_a] == a && self.inverse[slot_b] == b,
            "arrows {a} and {b} are already paired"
        );
        self.inverse[slot_a] = b;
        self.inverse[slot_b] = a;
    }

    /// Registers a forward/backward pair of arrows as mutual inverses.
    pub fn register_pair(
        &mut self,
        forward_long: &str,
        forward_short: &str,
        backward_long: &str,
        backward_short: &str,
    ) -> Result<(ArrowHandle, ArrowHandle), GraphError> {
        self.check_unused(&[forward_long, forward_short, backward_long, backward_short])?;
        // Long and short name may coincide within one arrow, never across the pair.
        if let Some(name) = [backward_long, backward_short]
            .into_iter()
            .find(|name| *name == forward_long || *name == forward_short)
        {
            return Err(GraphError::DuplicateArrow(name.to_string()));
        }
        let forward = self.insert(forward_long, forward_short, 1);
        let backward = self.insert(backward_long, backward_short, -1);
        self.pair(forward, backward);
        Ok((forward, backward))
    }

    /// Registers a neutral arrow that is its own inverse (e.g. "near").
    pub fn register_self_inverse(
        &mut self,
        long_name: &str,
        short_name: &str,
    ) -> Result<ArrowHandle, GraphError> {
        self.register(long_name, short_name, 0)
    }

    /// Looks up an arrow by its long or short name.
    pub fn lookup(&self, name: &str) -> Result<ArrowHandle, GraphError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownArrow(name.to_string()))
    }

    /// Returns the inverse of an arrow.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this vocabulary.
    pub fn inverse_of(&self, arrow: ArrowHandle) -> ArrowHandle {
        self.inverse[self.slot(arrow)]
    }

    /// Resolves a handle to its arrow.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this vocabulary.
    pub fn get(&self, arrow: ArrowHandle) -> &Arrow {
        &self.arrows[self.slot(arrow)]
    }

    /// Returns the id stamped on every handle this vocabulary issues.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Iterates arrows in registration order.
    pub fn arrows(&self) -> impl Iterator<Item = (ArrowHandle, &Arrow)> {
        self.arrows
            .iter()
            .enumerate()
            .map(|(i, arrow)| (ArrowHandle::new(self.id, i as u32), arrow))
    }

    /// Returns the number of registered arrows.
    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    /// Returns true if no arrows are registered.
    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    fn slot(&self, arrow: ArrowHandle) -> usize {
        assert_eq!(
            arrow.store(),
            self.id,
            "arrow handle {arrow} belongs to vocabulary {}, not {}",
            arrow.store(),
            self.id
        );
        let slot = arrow.index() as usize;
        assert!(
            slot < self.arrows.len(),
            "arrow handle {arrow} was not issued by this vocabulary"
        );
        slot
    }
}

impl Default for ArrowVocabulary {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_pair_is_mutually_inverse() {
        let vocabulary = ArrowVocabulary::seeded();
        let fwd = vocabulary.lookup(FORWARD).unwrap();
        let bwd = vocabulary.lookup(BACKWARD).unwrap();

        assert_eq!(vocabulary.inverse_of(fwd), bwd);
        assert_eq!(vocabulary.inverse_of(bwd), fwd);
        assert_eq!(vocabulary.get(fwd).direction(), 1);
        assert_eq!(vocabulary.get(bwd).direction(), -1);
    }

    #[test]
    fn test_lookup_by_long_or_short_name() {
        let mut vocabulary = ArrowVocabulary::seeded();
        let (leads, comes) = vocabulary
            .register_pair("leads to", "lt", "comes from", "cf")
            .unwrap();

        assert_eq!(vocabulary.lookup("leads to").unwrap(), leads);
        assert_eq!(vocabulary.lookup("lt").unwrap(), leads);
        assert_eq!(vocabulary.lookup("cf").unwrap(), comes);
        assert_eq!(vocabulary.get(comes).long_name(), "comes from");
    }

    #[test]
    fn test_double_inverse_is_identity() {
        let mut vocabulary = ArrowVocabulary::seeded();
        vocabulary
            .register_pair("contains", "contain", "is part of", "part")
            .unwrap();
        vocabulary.register_self_inverse("near", "nr").unwrap();

        for (handle, _) in vocabulary.arrows() {
            assert_eq!(vocabulary.inverse_of(vocabulary.inverse_of(handle)), handle);
        }
    }

    #[test]
    fn test_unknown_arrow() {
        let vocabulary = ArrowVocabulary::seeded();
        assert_eq!(
            vocabulary.lookup("no-such-arrow"),
            Err(GraphError::UnknownArrow("no-such-arrow".to_string()))
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut vocabulary = ArrowVocabulary::seeded();
        assert_eq!(
            vocabulary.register("forward", FORWARD, 1),
            Err(GraphError::DuplicateArrow(FORWARD.to_string()))
        );
        assert!(vocabulary.register_pair("same", "s", "same", "t").is_err());
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_registration_keeps_existing_inverses() {
        let mut vocabulary = ArrowVocabulary::seeded();
        let (contains, part_of) = vocabulary
            .register_pair("contains", "contain", "is part of", "part")
            .unwrap();
        let near = vocabulary.register_self_inverse("near", "nr").unwrap();

        // Reusing a name of an already paired arrow cannot re-pair it.
        assert!(vocabulary.register_pair("contains", "c2", "holds", "h").is_err());
        assert!(vocabulary.register_pair("wraps", "w", "near", "n2").is_err());
        vocabulary.register_pair("leads to", "lt", "comes from", "cf").unwrap();

        assert_eq!(vocabulary.inverse_of(contains), part_of);
        assert_eq!(vocabulary.inverse_of(part_of), contains);
        assert_eq!(vocabulary.inverse_of(near), near);
        assert_eq!(vocabulary.len(), 7);
    }

    #[test]
    #[should_panic(expected = "was not issued")]
    fn test_unissued_handle_panics() {
        let vocabulary = ArrowVocabulary::seeded();
        vocabulary.get(ArrowHandle::new(vocabulary.id(), 99));
    }

    #[test]
    #[should_panic(expected = "belongs to vocabulary")]
    fn test_foreign_handle_panics() {
        let mut first = ArrowVocabulary::seeded();
        let second = ArrowVocabulary::seeded();
        let (leads, _) = first
            .register_pair("leads to", "lt", "comes from", "cf")
            .unwrap();
        assert_ne!(first.lookup(FORWARD).unwrap(), second.lookup(FORWARD).unwrap());
        second.get(leads);
    }
}
