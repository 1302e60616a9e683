//! Move compilers
//!
//! Each algorithm implements [`SortCompiler`]: it sorts a private copy of the
//! keys and records every observable step as a [`MoveRecord`].  Compilers are
//! pure: the same keys always produce the same [`MoveSequence`], and the
//! caller's slice is never modified.
//!
//! # Algorithms
//!
//! - [`bubble`], [`selection`], [`insertion`]: swap-family moves.  One
//!   `compare` per comparison, plus one `swap` when the comparison decides an
//!   exchange.  Equal keys never swap.
//! - [`merge`], [`quick`]: range-family moves.  One write per position changed
//!   in the working array, tagged with the window being merged or partitioned.
//!
//! The active compiler is picked by the [`Algorithm`] tag, so callers never
//! branch on which sort is running.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::error::ConfigError;
use crate::model::Key;
use crate::moves::{MoveFamily, MoveRecord, MoveSequence};

/// Compile a key sequence into replayable moves
pub trait SortCompiler: Sync {
    /// Display name
    fn name(&self) -> &'static str;

    /// Which record shape this compiler emits
    fn family(&self) -> MoveFamily;

    /// Produce the moves that sort `keys` ascending
    fn compile(&self, keys: &[Key]) -> MoveSequence;
}

/// Algorithm selector tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// The compiler implementing this algorithm
    pub fn compiler(self) -> &'static dyn SortCompiler {
        match self {
            Algorithm::Bubble => &bubble::BubbleSort,
            Algorithm::Selection => &selection::SelectionSort,
            Algorithm::Insertion => &insertion::InsertionSort,
            Algorithm::Merge => &merge::MergeSort,
            Algorithm::Quick => &quick::QuickSort,
        }
    }

    pub fn name(self) -> &'static str {
        self.compiler().name()
    }

    /// Selector number, 1 to 5 in menu order
    pub fn number(self) -> u8 {
        match self {
            Algorithm::Bubble => 1,
            Algorithm::Selection => 2,
            Algorithm::Insertion => 3,
            Algorithm::Merge => 4,
            Algorithm::Quick => 5,
        }
    }

    pub fn from_number(number: u8) -> Result<Self, ConfigError> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.number() == number)
            .ok_or(ConfigError::InvalidAlgorithm(number))
    }

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        let i = self.number() as usize % Algorithm::ALL.len();
        Algorithm::ALL[i]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        let len = Algorithm::ALL.len();
        let i = (self.number() as usize + len - 2) % len;
        Algorithm::ALL[i]
    }
}

/// Accumulates swap-family moves alongside the working copy they describe
pub(crate) struct SwapRecorder {
    keys: Vec<Key>,
    moves: Vec<MoveRecord>,
}

impl SwapRecorder {
    pub fn new(keys: &[Key]) -> Self {
        SwapRecorder {
            keys: keys.to_vec(),
            moves: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Record a comparison of `a` against `b`; true when `keys[a] > keys[b]`
    pub fn greater(&mut self, a: usize, b: usize) -> bool {
        self.moves.push(MoveRecord::compare(a, b));
        self.keys[a] > self.keys[b]
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        self.moves.push(MoveRecord::swap(a, b));
    }

    pub fn finish(self) -> MoveSequence {
        MoveSequence::new(self.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_numbers() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_number(algorithm.number()), Ok(algorithm));
        }
        assert_eq!(
            Algorithm::from_number(6),
            Err(ConfigError::InvalidAlgorithm(6))
        );
        assert!(Algorithm::from_number(0).is_err());
    }

    #[test]
    fn test_algorithm_cycle() {
        assert_eq!(Algorithm::Bubble.next(), Algorithm::Selection);
        assert_eq!(Algorithm::Quick.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Quick);
        assert_eq!(Algorithm::Merge.prev(), Algorithm::Insertion);
    }

    #[test]
    fn test_families() {
        assert_eq!(Algorithm::Bubble.compiler().family(), MoveFamily::Swap);
        assert_eq!(Algorithm::Selection.compiler().family(), MoveFamily::Swap);
        assert_eq!(Algorithm::Insertion.compiler().family(), MoveFamily::Swap);
        assert_eq!(Algorithm::Merge.compiler().family(), MoveFamily::Range);
        assert_eq!(Algorithm::Quick.compiler().family(), MoveFamily::Range);
    }

    #[test]
    fn test_empty_input_compiles_to_nothing() {
        for algorithm in Algorithm::ALL {
            assert!(algorithm.compiler().compile(&[]).is_empty());
            assert!(algorithm.compiler().compile(&[7]).is_empty());
        }
    }
}
