//! Change-set cache for property writes.

use crate::models::PropertyMap;

/// Remembers the last committed property values and computes minimal deltas.
///
/// State only grows: committing a map never forgets keys it doesn't mention,
/// so a partial update from one tier can't erase what another tier wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCache {
    committed: PropertyMap,
}

impl ThemeCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            committed: PropertyMap::new(),
        }
    }

    /// Forgets everything committed so far.
    pub fn clear(&mut self) {
        self.committed.clear();
    }

    /// Returns the properties of `next` that differ from what is committed,
    /// then commits them.
    pub fn diff_and_commit(&mut self, next: &PropertyMap) -> PropertyMap {
        let changed: PropertyMap = next
            .iter()
            .filter(|(name, value)| self.committed.get(name) != Some(*value))
            .collect();

        self.committed.merge(changed.clone());
        changed
    }

    /// The committed value for a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.committed.get(name)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Everything committed so far.
    #[must_use]
    pub const fn snapshot(&self) -> &PropertyMap {
        &self.committed
    }
}
