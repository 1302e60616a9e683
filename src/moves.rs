//! Move records exchanged between compilers and the player
//!
//! A [`MoveRecord`] is one replayable instruction. Two shapes exist:
//!
//! - **Swap family** ([`MoveRecord::Swap`]): highlight two positions, optionally
//!   exchange their keys, then restore them.
//! - **Range family** ([`MoveRecord::Range`]): write one key into one position,
//!   tagged with the [`RangeId`] of the window being merged or partitioned.
//!
//! A [`MoveSequence`] is produced once per run and never mixes the two shapes.

use crate::error::MoveError;
use crate::model::Key;
use std::fmt;
use std::sync::Arc;

/// Operation carried by a swap-family record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapOp {
    Compare,
    Swap,
}

/// Which of the two record shapes a record has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFamily {
    Swap,
    Range,
}

/// Identifier of a sub-array window.
///
/// Equality is by identity: two windows built by different recursive calls
/// compare unequal even when they cover the same indices. Clones share the
/// identity of the window they were cloned from.
#[derive(Clone)]
pub struct RangeId(Arc<[usize]>);

impl RangeId {
    /// Window covering `lo..=hi`
    pub fn window(lo: usize, hi: usize) -> Self {
        RangeId((lo..=hi).collect())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Same index set, regardless of identity
    pub fn same_indices(&self, other: &RangeId) -> bool {
        self.0 == other.0
    }
}

impl PartialEq for RangeId {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RangeId {}

impl fmt::Debug for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.first(), self.0.last()) {
            (Some(lo), Some(hi)) => write!(f, "RangeId({}..={})", lo, hi),
            _ => write!(f, "RangeId(empty)"),
        }
    }
}

/// One replayable instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRecord {
    Swap { a: usize, b: usize, op: SwapOp },
    Range { index: usize, value: Key, range: RangeId },
}

impl MoveRecord {
    pub fn compare(a: usize, b: usize) -> Self {
        MoveRecord::Swap {
            a,
            b,
            op: SwapOp::Compare,
        }
    }

    pub fn swap(a: usize, b: usize) -> Self {
        MoveRecord::Swap {
            a,
            b,
            op: SwapOp::Swap,
        }
    }

    pub fn write(index: usize, value: Key, range: &RangeId) -> Self {
        MoveRecord::Range {
            index,
            value,
            range: range.clone(),
        }
    }

    pub fn family(&self) -> MoveFamily {
        match self {
            MoveRecord::Swap { .. } => MoveFamily::Swap,
            MoveRecord::Range { .. } => MoveFamily::Range,
        }
    }

    /// Largest index this record touches, window included
    fn max_index(&self) -> Option<usize> {
        match self {
            MoveRecord::Swap { a, b, .. } => Some((*a).max(*b)),
            MoveRecord::Range { index, range, .. } => range
                .indices()
                .iter()
                .copied()
                .chain(std::iter::once(*index))
                .max(),
        }
    }
}

/// Ordered, immutable list of moves for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence {
    records: Vec<MoveRecord>,
}

impl MoveSequence {
    pub fn new(records: Vec<MoveRecord>) -> Self {
        MoveSequence { records }
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shape of the first record, `None` when empty
    pub fn family(&self) -> Option<MoveFamily> {
        self.records.first().map(MoveRecord::family)
    }

    /// Number of distinct windows, compared by identity
    pub fn range_count(&self) -> usize {
        let mut count = 0;
        let mut prev: Option<&RangeId> = None;
        for record in &self.records {
            if let MoveRecord::Range { range, .. } = record {
                if prev != Some(range) {
                    count += 1;
                    prev = Some(range);
                }
            }
        }
        count
    }

    /// Check every index against `len` and that only one shape is used.
    pub fn validate(&self, len: usize) -> Result<(), MoveError> {
        let Some(expected) = self.family() else {
            return Ok(());
        };

        for (position, record) in self.records.iter().enumerate() {
            let found = record.family();
            if found != expected {
                return Err(MoveError::MixedFamilies {
                    position,
                    expected,
                    found,
                });
            }
            if let Some(index) = record.max_index() {
                if index >= len {
                    return Err(MoveError::IndexOutOfRange {
                        position,
                        index,
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn into_records(self) -> Vec<MoveRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_identity() {
        let a = RangeId::window(0, 3);
        let b = RangeId::window(0, 3);
        assert_ne!(a, b);
        assert!(a.same_indices(&b));
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let moves = MoveSequence::new(vec![MoveRecord::compare(0, 1), MoveRecord::swap(1, 4)]);
        assert_eq!(
            moves.validate(4),
            Err(MoveError::IndexOutOfRange {
                position: 1,
                index: 4,
                len: 4
            })
        );
        assert!(moves.validate(5).is_ok());
    }

    #[test]
    fn test_validate_rejects_window_past_end() {
        let window = RangeId::window(0, 2);
        let moves = MoveSequence::new(vec![MoveRecord::write(0, 7, &window)]);
        assert!(moves.validate(2).is_err());
        assert!(moves.validate(3).is_ok());
    }

    #[test]
    fn test_validate_rejects_mixed_families() {
        let window = RangeId::window(0, 1);
        let moves = MoveSequence::new(vec![
            MoveRecord::compare(0, 1),
            MoveRecord::write(0, 1, &window),
        ]);
        assert_eq!(
            moves.validate(2),
            Err(MoveError::MixedFamilies {
                position: 1,
                expected: MoveFamily::Swap,
                found: MoveFamily::Range
            })
        );
    }

    #[test]
    fn test_range_count_uses_identity() {
        let first = RangeId::window(0, 1);
        let second = RangeId::window(0, 1);
        let moves = MoveSequence::new(vec![
            MoveRecord::write(0, 1, &first),
            MoveRecord::write(1, 2, &first),
            MoveRecord::write(0, 1, &second),
        ]);
        assert_eq!(moves.range_count(), 2);
    }
}
