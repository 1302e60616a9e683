//! Displayed element model
//!
//! An [`Element`] is one bar of the visualization: the key that sets its
//! height and a [`ClassType`] that only affects how it is drawn.

/// Key type for every sortable value
pub type Key = u32;

/// Presentation class of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassType {
    /// Untouched
    #[default]
    Normal,
    /// Being compared, or inside the active range
    Current,
    /// Settled after a finished run
    Done,
}

/// A single displayed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub key: Key,
    pub class: ClassType,
}

impl Element {
    pub fn new(key: Key) -> Self {
        Element {
            key,
            class: ClassType::Normal,
        }
    }
}

/// Build a fresh `Normal` sequence from raw keys
pub fn elements_from_keys(keys: &[Key]) -> Vec<Element> {
    keys.iter().copied().map(Element::new).collect()
}

/// Copy the keys out of an element sequence.
///
/// Compilers work on this snapshot so the displayed sequence is never
/// touched while moves are being computed.
pub fn keys_of(elements: &[Element]) -> Vec<Key> {
    elements.iter().map(|e| e.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_elements() {
        let elements = elements_from_keys(&[4, 1, 3]);
        assert!(elements.iter().all(|e| e.class == ClassType::Normal));
        assert_eq!(keys_of(&elements), vec![4, 1, 3]);
    }
}
