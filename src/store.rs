//! Visual state store
//!
//! [`VisualStore`] owns the element sequence a renderer draws. All mutations
//! go through [`VisualStore::exchange`], [`VisualStore::set_value`] and
//! [`VisualStore::set_class`]; each successful mutation bumps
//! [`VisualStore::version`] so observers can tell states apart.
//!
//! # Bounds
//!
//! Mutating an empty store is a no-op. On a non-empty store, an index outside
//! the sequence is reported as [`StoreError::IndexOutOfRange`] and nothing is
//! changed.

use crate::error::StoreError;
use crate::model::{elements_from_keys, keys_of, ClassType, Element, Key};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct VisualStore {
    elements: Vec<Element>,
    version: u64,
}

impl VisualStore {
    pub fn new(elements: Vec<Element>) -> Self {
        VisualStore {
            elements,
            version: 0,
        }
    }

    pub fn from_keys(keys: &[Key]) -> Self {
        Self::new(elements_from_keys(keys))
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn keys(&self) -> Vec<Key> {
        keys_of(&self.elements)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of mutations applied so far
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Swap the keys at `i` and `j`
    pub fn exchange(&mut self, i: usize, j: usize) -> Result<(), StoreError> {
        if self.is_empty() {
            return Ok(());
        }
        self.check(i)?;
        self.check(j)?;

        let stored = self.elements[i].key;
        self.elements[i].key = self.elements[j].key;
        self.elements[j].key = stored;
        self.version += 1;
        Ok(())
    }

    /// Overwrite the key at `i`
    pub fn set_value(&mut self, i: usize, value: Key) -> Result<(), StoreError> {
        if self.is_empty() {
            return Ok(());
        }
        self.check(i)?;

        self.elements[i].key = value;
        self.version += 1;
        Ok(())
    }

    /// Overwrite the class of every listed index.
    ///
    /// All indices are checked before any element changes.
    pub fn set_class(&mut self, indices: &[usize], class: ClassType) -> Result<(), StoreError> {
        if self.is_empty() || indices.is_empty() {
            return Ok(());
        }
        for &i in indices {
            self.check(i)?;
        }

        for &i in indices {
            self.elements[i].class = class;
        }
        self.version += 1;
        Ok(())
    }

    /// Overwrite the class of every element in one batch
    pub fn set_class_all(&mut self, class: ClassType) {
        if self.is_empty() {
            return;
        }
        for element in &mut self.elements {
            element.class = class;
        }
        self.version += 1;
    }

    /// Whether keys are nondecreasing
    pub fn is_sorted(&self) -> bool {
        self.elements.windows(2).all(|w| w[0].key <= w[1].key)
    }

    pub fn all_done(&self) -> bool {
        self.elements.iter().all(|e| e.class == ClassType::Done)
    }

    /// Multiset of keys: key -> occurrence count
    pub fn key_counts(&self) -> FxHashMap<Key, usize> {
        let mut counts = FxHashMap::default();
        for element in &self.elements {
            *counts.entry(element.key).or_insert(0) += 1;
        }
        counts
    }

    fn check(&self, index: usize) -> Result<(), StoreError> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_swaps_keys_only() {
        let mut store = VisualStore::from_keys(&[3, 9]);
        store.set_class(&[0], ClassType::Current).unwrap();
        store.exchange(0, 1).unwrap();

        assert_eq!(store.keys(), vec![9, 3]);
        assert_eq!(store.elements()[0].class, ClassType::Current);
        assert_eq!(store.elements()[1].class, ClassType::Normal);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_set_value() {
        let mut store = VisualStore::from_keys(&[3, 9, 4]);
        store.set_value(2, 1).unwrap();
        assert_eq!(store.keys(), vec![3, 9, 1]);
    }

    #[test]
    fn test_empty_store_mutations_are_noops() {
        let mut store = VisualStore::default();
        assert!(store.exchange(0, 5).is_ok());
        assert!(store.set_value(3, 1).is_ok());
        assert!(store.set_class(&[0, 1], ClassType::Current).is_ok());
        store.set_class_all(ClassType::Done);
        assert_eq!(store.version(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_out_of_range_leaves_store_untouched() {
        let mut store = VisualStore::from_keys(&[1, 2, 3]);
        let err = store.set_class(&[0, 3], ClassType::Current).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(store.elements()[0].class, ClassType::Normal);
        assert!(store.exchange(1, 7).is_err());
        assert_eq!(store.keys(), vec![1, 2, 3]);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_queries() {
        let mut store = VisualStore::from_keys(&[2, 2, 5]);
        assert!(store.is_sorted());
        assert!(!store.all_done());
        store.set_class_all(ClassType::Done);
        assert!(store.all_done());

        let counts = store.key_counts();
        assert_eq!(counts.get(&2), Some(&2));
        assert_eq!(counts.get(&5), Some(&1));
    }
}
